// Default roster registered at start-up: three teams, their employees and the
// "Open Shifts" resource.

use crate::modules::roster::adapters::outbound::projections::RosterProjectionRepository;
use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::core::open_shifts::{
    OPEN_SHIFT_COLOR, OPEN_SHIFT_GROUP_ID, OPEN_SHIFT_RESOURCE_ID, OPEN_SHIFT_RESOURCE_NAME,
};
use crate::modules::roster::use_cases::register_roster::command::{RegisterGroup, RegisterResource};
use crate::modules::roster::use_cases::register_roster::handler::RosterHandler;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::watermark::WatermarkRepository;

const GROUPS: [(&str, &str); 3] = [
    ("group-sales", "Sales Department"),
    ("group-ops", "Operations"),
    ("group-support", "Customer Support"),
];

const RESOURCES: [(&str, &str, &str, &str); 6] = [
    ("res-1", "Alice Johnson", "#4caf50", "group-sales"),
    ("res-2", "Bob Smith", "#2196f3", "group-sales"),
    ("res-3", "Carol White", "#ff9800", "group-ops"),
    ("res-4", "David Brown", "#9c27b0", "group-ops"),
    ("res-5", "Eve Davis", "#f44336", "group-support"),
    ("res-6", "Frank Miller", "#009688", "group-support"),
];

pub fn default_groups() -> Vec<RegisterGroup> {
    GROUPS
        .iter()
        .map(|(group_id, name)| RegisterGroup {
            group_id: group_id.to_string(),
            name: name.to_string(),
            expanded: true,
        })
        .collect()
}

pub fn default_resources() -> Vec<RegisterResource> {
    RESOURCES
        .iter()
        .map(|(resource_id, name, color, group_id)| RegisterResource {
            resource_id: resource_id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            group_id: group_id.to_string(),
        })
        .chain(std::iter::once(RegisterResource {
            resource_id: OPEN_SHIFT_RESOURCE_ID.to_string(),
            name: OPEN_SHIFT_RESOURCE_NAME.to_string(),
            color: OPEN_SHIFT_COLOR.to_string(),
            group_id: OPEN_SHIFT_GROUP_ID.to_string(),
        }))
        .collect()
}

pub async fn seed_default_roster<TEventStore, TRepository, TWatermarkRepository>(
    handler: &RosterHandler<TEventStore, TRepository, TWatermarkRepository>,
) -> Result<(), ApplicationError>
where
    TEventStore: EventStore<RosterEvent> + Send + Sync + 'static,
    TRepository: RosterProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    for group in default_groups() {
        handler.register_group(group).await?;
    }
    for resource in default_resources() {
        handler.register_resource(resource).await?;
    }
    tracing::info!(
        groups = GROUPS.len(),
        resources = RESOURCES.len() + 1,
        "default roster seeded"
    );
    Ok(())
}
