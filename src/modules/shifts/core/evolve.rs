use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::state::ShiftState;

pub fn evolve(state: ShiftState, event: ShiftEvent) -> ShiftState {
    match (state, event) {
        (ShiftState::None, ShiftEvent::ShiftScheduledV1(e)) => ShiftState::Scheduled {
            shift_id: e.shift_id,
            resource_id: e.resource_id,
            title: e.title,
            start: e.start,
            end: e.end,
            color: e.color,
            open_shift_group_id: e.open_shift_group_id,
            created_at: e.created_at,
        },
        (ShiftState::Scheduled { shift_id, .. }, ShiftEvent::ShiftCancelledV1(e))
            if shift_id == e.shift_id =>
        {
            ShiftState::Cancelled {
                shift_id,
                cancelled_at: e.cancelled_at,
            }
        }
        (state, _) => state,
    }
}
