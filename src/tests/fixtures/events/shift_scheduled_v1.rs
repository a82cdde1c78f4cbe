// Shared test fixture for ShiftScheduledV1.

use crate::modules::shifts::core::events::v1::shift_scheduled::ShiftScheduledV1;
use crate::modules::shifts::use_cases::schedule_shift::decide::parse_local_date_time;
use crate::tests::fixtures::commands::schedule_shift::ScheduleShiftBuilder;

/// Builder function returning a canonical event instance for tests.
pub fn make_shift_scheduled_v1_event() -> ShiftScheduledV1 {
    let command = ScheduleShiftBuilder::new().build();
    ShiftScheduledV1 {
        shift_id: command.shift_id,
        resource_id: command.resource_id,
        title: command.title,
        start: parse_local_date_time(&command.start).unwrap(),
        end: parse_local_date_time(&command.end).unwrap(),
        color: command.color,
        open_shift_group_id: command.open_shift_group_id,
        created_at: command.created_at,
    }
}
