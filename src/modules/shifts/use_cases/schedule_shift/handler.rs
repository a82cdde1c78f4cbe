use crate::modules::roster::core::open_shifts::is_open_shift_resource;
use crate::modules::roster::use_cases::list_roster::queries_port::RosterQueries;
use crate::modules::shifts::adapters::outbound::projections::ShiftProjectionRepository;
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::evolve::evolve;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::list_shifts::handler::ShiftProjector;
use crate::modules::shifts::use_cases::schedule_shift::command::ScheduleShift;
use crate::modules::shifts::use_cases::schedule_shift::decide::decide_schedule;
use crate::modules::shifts::use_cases::schedule_shift::decision::Decision;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::watermark::WatermarkRepository;
use std::sync::Arc;

pub struct ScheduleShiftHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TRepository: ShiftProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    projector: Arc<ShiftProjector<TRepository, TWatermarkRepository>>,
    roster: Arc<dyn RosterQueries + Send + Sync>,
}

impl<TEventStore, TRepository, TWatermarkRepository>
    ScheduleShiftHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TRepository: ShiftProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        projector: Arc<ShiftProjector<TRepository, TWatermarkRepository>>,
        roster: Arc<dyn RosterQueries + Send + Sync>,
    ) -> Self {
        Self {
            event_store,
            projector,
            roster,
        }
    }

    pub async fn handle(
        &self,
        stream_id: &str,
        command: ScheduleShift,
    ) -> Result<(), ApplicationError> {
        let group_name = self.open_shift_group_name(&command).await?;

        let stream = self.event_store.load(stream_id).await?;
        self.projector.catch_up(stream_id, &stream.events).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(ShiftState::None, evolve);

        match decide_schedule(&state, command, group_name.as_deref()) {
            Decision::Accepted { events } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                for (offset, event) in events.iter().enumerate() {
                    let version = stream.version + offset as i64 + 1;
                    self.projector.apply_one(stream_id, version, event).await?;
                }
                tracing::info!(stream_id, "shift scheduled");
                Ok(())
            }
            Decision::Rejected { reason } => {
                tracing::debug!(stream_id, %reason, "shift rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }

    async fn open_shift_group_name(
        &self,
        command: &ScheduleShift,
    ) -> Result<Option<String>, ApplicationError> {
        if !is_open_shift_resource(command.resource_id.trim()) {
            return Ok(None);
        }
        let Some(group_id) = command.open_shift_group_id.as_deref() else {
            return Ok(None);
        };
        let group = self.roster.get_group(group_id.trim()).await?;
        Ok(group.map(|g| g.name))
    }
}
