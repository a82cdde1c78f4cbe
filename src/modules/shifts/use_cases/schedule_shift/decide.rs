// Shift creation validator.
//
// Checks run in a fixed order and the first failure wins: start, end, interval,
// resource, title, open shift group, then whether the stream already holds a shift.
// For the "Open Shifts" resource the group name is folded into the stored title and
// the group id is kept on the event as well.

use crate::modules::roster::core::open_shifts::{is_open_shift_resource, open_shift_title};
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::events::v1::shift_scheduled::ShiftScheduledV1;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::schedule_shift::command::ScheduleShift;
use crate::modules::shifts::use_cases::schedule_shift::decision::{DecideError, Decision};
use chrono::NaiveDateTime;

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

pub fn parse_local_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// `open_shift_group_name` is the name of the group referenced by
/// `command.open_shift_group_id`, when that group exists.
pub fn decide_schedule(
    state: &ShiftState,
    command: ScheduleShift,
    open_shift_group_name: Option<&str>,
) -> Decision {
    match validate(state, command, open_shift_group_name) {
        Ok(event) => Decision::Accepted {
            events: vec![ShiftEvent::ShiftScheduledV1(event)],
        },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn validate(
    state: &ShiftState,
    command: ScheduleShift,
    open_shift_group_name: Option<&str>,
) -> Result<ShiftScheduledV1, DecideError> {
    let start = parse_local_date_time(&command.start).ok_or(DecideError::InvalidStart)?;
    let end = parse_local_date_time(&command.end).ok_or(DecideError::InvalidEnd)?;
    if end <= start {
        return Err(DecideError::InvalidInterval);
    }

    let resource_id = command.resource_id.trim();
    if resource_id.is_empty() {
        return Err(DecideError::MissingResource);
    }

    let title = command.title.trim();
    if title.is_empty() {
        return Err(DecideError::MissingTitle);
    }

    let (title, open_shift_group_id) = if is_open_shift_resource(resource_id) {
        let group_id = command
            .open_shift_group_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(DecideError::MissingOpenShiftGroup)?;
        let group_name = open_shift_group_name.ok_or(DecideError::MissingOpenShiftGroup)?;
        (open_shift_title(group_name, title), Some(group_id.to_string()))
    } else {
        (title.to_string(), None)
    };

    if !matches!(state, ShiftState::None) {
        return Err(DecideError::AlreadyExists);
    }

    Ok(ShiftScheduledV1 {
        shift_id: command.shift_id,
        resource_id: resource_id.to_string(),
        title,
        start,
        end,
        color: command.color.filter(|c| !c.trim().is_empty()),
        open_shift_group_id,
        created_at: command.created_at,
    })
}
