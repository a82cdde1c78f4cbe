use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::core::events::v1::group_expansion_toggled::GroupExpansionToggledV1;
use crate::modules::roster::core::state::GroupState;
use crate::modules::roster::use_cases::toggle_group::command::ToggleGroupExpansion;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Group not found")]
    NotFound,
}

pub fn decide_toggle(
    state: &GroupState,
    command: ToggleGroupExpansion,
) -> Result<Vec<RosterEvent>, DecideError> {
    match state {
        GroupState::Registered {
            group_id, expanded, ..
        } if *group_id == command.group_id => Ok(vec![RosterEvent::GroupExpansionToggledV1(
            GroupExpansionToggledV1 {
                group_id: command.group_id,
                expanded: !expanded,
            },
        )]),
        _ => Err(DecideError::NotFound),
    }
}
