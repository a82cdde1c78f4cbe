use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("unknown view mode: {0}")]
    UnknownViewMode(String),

    #[error("date {0} is outside the supported calendar range")]
    OutOfRange(NaiveDate),
}
