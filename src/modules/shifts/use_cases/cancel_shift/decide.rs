use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::events::v1::shift_cancelled::ShiftCancelledV1;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::cancel_shift::command::CancelShift;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Shift not found")]
    NotFound,

    #[error("Shift already cancelled")]
    AlreadyCancelled,
}

pub fn decide_cancel(
    state: &ShiftState,
    command: CancelShift,
) -> Result<Vec<ShiftEvent>, DecideError> {
    match state {
        ShiftState::None => Err(DecideError::NotFound),
        ShiftState::Cancelled { .. } => Err(DecideError::AlreadyCancelled),
        ShiftState::Scheduled { shift_id, .. } if *shift_id != command.shift_id => {
            Err(DecideError::NotFound)
        }
        ShiftState::Scheduled { .. } => Ok(vec![ShiftEvent::ShiftCancelledV1(ShiftCancelledV1 {
            shift_id: command.shift_id,
            cancelled_at: command.cancelled_at,
        })]),
    }
}
