use crate::modules::roster::adapters::outbound::projections_in_memory::InMemoryRosterProjections;
use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::use_cases::list_roster::handler::RosterProjector;
use crate::modules::roster::use_cases::register_roster::handler::RosterHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::seed::seed_default_roster;
use std::sync::Arc;

/// Read model holding the default roster.
pub async fn seeded_roster() -> Arc<InMemoryRosterProjections> {
    let projections = Arc::new(InMemoryRosterProjections::new());
    let projector = Arc::new(RosterProjector::new(
        "roster",
        projections.clone(),
        projections.clone(),
    ));
    let handler = RosterHandler::new(Arc::new(InMemoryEventStore::<RosterEvent>::new()), projector);
    seed_default_roster(&handler).await.unwrap();
    projections
}
