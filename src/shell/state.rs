use crate::modules::calendar::use_cases::render_calendar::handler::RenderCalendarHandler;
use crate::modules::roster::adapters::outbound::projections_in_memory::InMemoryRosterProjections;
use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::use_cases::list_roster::handler::RosterProjector;
use crate::modules::roster::use_cases::list_roster::queries_port::RosterQueries;
use crate::modules::roster::use_cases::register_roster::handler::RosterHandler;
use crate::modules::roster::use_cases::toggle_group::handler::ToggleGroupHandler;
use crate::modules::shifts::adapters::outbound::projections_in_memory::InMemoryShiftProjections;
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::use_cases::cancel_shift::handler::CancelShiftHandler;
use crate::modules::shifts::use_cases::list_shifts::handler::ShiftProjector;
use crate::modules::shifts::use_cases::list_shifts::queries_port::ShiftQueries;
use crate::modules::shifts::use_cases::schedule_shift::handler::ScheduleShiftHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub type ShiftEventStore = InMemoryEventStore<ShiftEvent>;
pub type RosterEventStore = InMemoryEventStore<RosterEvent>;

/// Store handles and use case handlers, passed explicitly to every inbound adapter.
#[derive(Clone)]
pub struct AppState {
    pub shift_queries: Arc<dyn ShiftQueries + Send + Sync>,
    pub roster_queries: Arc<dyn RosterQueries + Send + Sync>,
    pub render_calendar_handler: Arc<RenderCalendarHandler>,
    pub schedule_shift_handler: Arc<
        ScheduleShiftHandler<ShiftEventStore, InMemoryShiftProjections, InMemoryShiftProjections>,
    >,
    pub cancel_shift_handler: Arc<
        CancelShiftHandler<ShiftEventStore, InMemoryShiftProjections, InMemoryShiftProjections>,
    >,
    pub roster_handler:
        Arc<RosterHandler<RosterEventStore, InMemoryRosterProjections, InMemoryRosterProjections>>,
    pub toggle_group_handler: Arc<
        ToggleGroupHandler<RosterEventStore, InMemoryRosterProjections, InMemoryRosterProjections>,
    >,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self::from_stores(
            Arc::new(ShiftEventStore::new()),
            Arc::new(InMemoryShiftProjections::new()),
            Arc::new(RosterEventStore::new()),
            Arc::new(InMemoryRosterProjections::new()),
        )
    }

    pub fn from_stores(
        shift_store: Arc<ShiftEventStore>,
        shift_projections: Arc<InMemoryShiftProjections>,
        roster_store: Arc<RosterEventStore>,
        roster_projections: Arc<InMemoryRosterProjections>,
    ) -> Self {
        let shift_projector = Arc::new(ShiftProjector::new(
            "shifts",
            shift_projections.clone(),
            shift_projections.clone(),
        ));
        let roster_projector = Arc::new(RosterProjector::new(
            "roster",
            roster_projections.clone(),
            roster_projections.clone(),
        ));

        Self {
            shift_queries: shift_projections.clone(),
            roster_queries: roster_projections.clone(),
            render_calendar_handler: Arc::new(RenderCalendarHandler::new(
                shift_projections,
                roster_projections.clone(),
            )),
            schedule_shift_handler: Arc::new(ScheduleShiftHandler::new(
                shift_store.clone(),
                shift_projector.clone(),
                roster_projections,
            )),
            cancel_shift_handler: Arc::new(CancelShiftHandler::new(shift_store, shift_projector)),
            roster_handler: Arc::new(RosterHandler::new(
                roster_store.clone(),
                roster_projector.clone(),
            )),
            toggle_group_handler: Arc::new(ToggleGroupHandler::new(roster_store, roster_projector)),
        }
    }
}
