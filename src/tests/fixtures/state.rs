use crate::modules::roster::adapters::outbound::projections_in_memory::InMemoryRosterProjections;
use crate::modules::shifts::adapters::outbound::projections_in_memory::InMemoryShiftProjections;
use crate::shell::seed::seed_default_roster;
use crate::shell::state::{AppState, RosterEventStore, ShiftEventStore};
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::in_memory()
}

pub async fn make_seeded_state() -> AppState {
    let state = AppState::in_memory();
    seed_default_roster(&state.roster_handler).await.unwrap();
    state
}

pub fn make_offline_event_store_state() -> AppState {
    let mut shift_store = ShiftEventStore::new();
    shift_store.toggle_offline();
    AppState::from_stores(
        Arc::new(shift_store),
        Arc::new(InMemoryShiftProjections::new()),
        Arc::new(RosterEventStore::new()),
        Arc::new(InMemoryRosterProjections::new()),
    )
}

pub fn make_offline_read_model_state() -> AppState {
    let shift_projections = InMemoryShiftProjections::new();
    shift_projections.toggle_offline();
    let roster_projections = InMemoryRosterProjections::new();
    roster_projections.toggle_offline();
    AppState::from_stores(
        Arc::new(ShiftEventStore::new()),
        Arc::new(shift_projections),
        Arc::new(RosterEventStore::new()),
        Arc::new(roster_projections),
    )
}
