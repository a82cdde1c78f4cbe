use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::core::events::v1::group_registered::GroupRegisteredV1;
use crate::modules::roster::core::events::v1::resource_registered::ResourceRegisteredV1;
use crate::modules::roster::core::state::{GroupState, ResourceState};
use crate::modules::roster::use_cases::register_roster::command::{RegisterGroup, RegisterResource};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Group already exists")]
    GroupAlreadyExists,

    #[error("Resource already exists")]
    ResourceAlreadyExists,

    #[error("Name is required")]
    MissingName,
}

pub fn decide_register_group(
    state: &GroupState,
    command: RegisterGroup,
) -> Result<Vec<RosterEvent>, DecideError> {
    if !matches!(state, GroupState::None) {
        return Err(DecideError::GroupAlreadyExists);
    }
    let name = command.name.trim();
    if name.is_empty() {
        return Err(DecideError::MissingName);
    }
    Ok(vec![RosterEvent::GroupRegisteredV1(GroupRegisteredV1 {
        group_id: command.group_id,
        name: name.to_string(),
        expanded: command.expanded,
    })])
}

/// The group is not looked up: a resource may point at a placeholder group.
pub fn decide_register_resource(
    state: &ResourceState,
    command: RegisterResource,
) -> Result<Vec<RosterEvent>, DecideError> {
    if !matches!(state, ResourceState::None) {
        return Err(DecideError::ResourceAlreadyExists);
    }
    let name = command.name.trim();
    if name.is_empty() {
        return Err(DecideError::MissingName);
    }
    Ok(vec![RosterEvent::ResourceRegisteredV1(ResourceRegisteredV1 {
        resource_id: command.resource_id,
        name: name.to_string(),
        color: command.color,
        group_id: command.group_id,
    })])
}

#[cfg(test)]
mod roster_register_decide_tests {
    use super::*;
    use crate::modules::roster::core::evolve::{evolve_group, evolve_resource};
    use crate::modules::roster::core::open_shifts::{
        OPEN_SHIFT_COLOR, OPEN_SHIFT_GROUP_ID, OPEN_SHIFT_RESOURCE_ID, OPEN_SHIFT_RESOURCE_NAME,
    };
    use rstest::rstest;

    fn sales() -> RegisterGroup {
        RegisterGroup {
            group_id: "group-sales".into(),
            name: " Sales Department ".into(),
            expanded: true,
        }
    }

    #[rstest]
    fn it_should_register_a_group_with_a_trimmed_name() {
        let events = decide_register_group(&GroupState::None, sales()).unwrap();
        assert_eq!(
            events,
            vec![RosterEvent::GroupRegisteredV1(GroupRegisteredV1 {
                group_id: "group-sales".into(),
                name: "Sales Department".into(),
                expanded: true,
            })]
        );
    }

    #[rstest]
    fn it_should_reject_registering_a_group_twice() {
        let state = decide_register_group(&GroupState::None, sales())
            .unwrap()
            .into_iter()
            .fold(GroupState::None, evolve_group);
        assert_eq!(
            decide_register_group(&state, sales()),
            Err(DecideError::GroupAlreadyExists)
        );
    }

    #[rstest]
    fn it_should_reject_a_nameless_group() {
        let command = RegisterGroup {
            name: "  ".into(),
            ..sales()
        };
        assert_eq!(
            decide_register_group(&GroupState::None, command),
            Err(DecideError::MissingName)
        );
    }

    #[rstest]
    fn it_should_register_the_open_shifts_resource_under_the_placeholder_group() {
        let command = RegisterResource {
            resource_id: OPEN_SHIFT_RESOURCE_ID.into(),
            name: OPEN_SHIFT_RESOURCE_NAME.into(),
            color: OPEN_SHIFT_COLOR.into(),
            group_id: OPEN_SHIFT_GROUP_ID.into(),
        };
        let state = decide_register_resource(&ResourceState::None, command.clone())
            .unwrap()
            .into_iter()
            .fold(ResourceState::None, evolve_resource);
        assert!(matches!(
            &state,
            ResourceState::Registered { group_id, .. } if group_id == "N/A"
        ));
        assert_eq!(
            decide_register_resource(&state, command),
            Err(DecideError::ResourceAlreadyExists)
        );
    }
}
