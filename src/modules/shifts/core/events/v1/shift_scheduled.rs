// Event payload: ShiftScheduledV1.
//
// Records a validated shift as the store will keep it. `title` is the final title,
// including the open shift prefix when applicable. `start` and `end` are local wall
// clock times; `created_at` is epoch milliseconds.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ShiftScheduledV1 {
    pub shift_id: String,
    pub resource_id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<String>,
    pub open_shift_group_id: Option<String>,
    pub created_at: i64,
}
