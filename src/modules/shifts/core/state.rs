use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftState {
    None,
    Scheduled {
        shift_id: String,
        resource_id: String,
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        color: Option<String>,
        open_shift_group_id: Option<String>,
        created_at: i64,
    },
    Cancelled {
        shift_id: String,
        cancelled_at: i64,
    },
}
