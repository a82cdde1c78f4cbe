use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::use_cases::list_roster::projection::{GroupRow, ResourceRow};

pub enum Mutation {
    UpsertGroup(GroupRow),
    SetGroupExpanded {
        group_id: String,
        expanded: bool,
        last_event_id: String,
    },
    UpsertResource(ResourceRow),
}

pub fn apply(stream_id: &str, version: i64, event: &RosterEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        RosterEvent::GroupRegisteredV1(details) => vec![Mutation::UpsertGroup(GroupRow {
            group_id: details.group_id.clone(),
            name: details.name.clone(),
            expanded: details.expanded,
            last_event_id: Some(stream_key),
        })],
        RosterEvent::GroupExpansionToggledV1(details) => vec![Mutation::SetGroupExpanded {
            group_id: details.group_id.clone(),
            expanded: details.expanded,
            last_event_id: stream_key,
        }],
        RosterEvent::ResourceRegisteredV1(details) => vec![Mutation::UpsertResource(ResourceRow {
            resource_id: details.resource_id.clone(),
            name: details.name.clone(),
            color: details.color.clone(),
            group_id: details.group_id.clone(),
            last_event_id: Some(stream_key),
        })],
    }
}
