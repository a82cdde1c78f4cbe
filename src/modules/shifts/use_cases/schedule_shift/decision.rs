use crate::modules::shifts::core::events::ShiftEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Invalid start time")]
    InvalidStart,

    #[error("Invalid end time")]
    InvalidEnd,

    #[error("End time must be after start time")]
    InvalidInterval,

    #[error("Please select a resource")]
    MissingResource,

    #[error("Title is required")]
    MissingTitle,

    #[error("Please select a group for the open shift")]
    MissingOpenShiftGroup,

    #[error("Shift already exists")]
    AlreadyExists,
}

pub enum Decision {
    Accepted { events: Vec<ShiftEvent> },
    Rejected { reason: DecideError },
}
