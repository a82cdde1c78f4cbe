use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::core::state::{GroupState, ResourceState};

pub fn evolve_group(state: GroupState, event: RosterEvent) -> GroupState {
    match (state, event) {
        (GroupState::None, RosterEvent::GroupRegisteredV1(e)) => GroupState::Registered {
            group_id: e.group_id,
            name: e.name,
            expanded: e.expanded,
        },
        (GroupState::Registered { group_id, name, .. }, RosterEvent::GroupExpansionToggledV1(e))
            if group_id == e.group_id =>
        {
            GroupState::Registered {
                group_id,
                name,
                expanded: e.expanded,
            }
        }
        (state, _) => state,
    }
}

pub fn evolve_resource(state: ResourceState, event: RosterEvent) -> ResourceState {
    match (state, event) {
        (ResourceState::None, RosterEvent::ResourceRegisteredV1(e)) => ResourceState::Registered {
            resource_id: e.resource_id,
            name: e.name,
            color: e.color,
            group_id: e.group_id,
        },
        (state, _) => state,
    }
}
