use crate::modules::calendar::core::layout::TimedEntry;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShiftRow {
    pub shift_id: String,
    pub resource_id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<String>,
    pub open_shift_group_id: Option<String>,
    pub created_at: i64,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShiftView {
    pub shift_id: String,
    pub resource_id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<String>,
    pub open_shift_group_id: Option<String>,
    pub created_at: i64,
}

impl From<ShiftRow> for ShiftView {
    fn from(row: ShiftRow) -> Self {
        Self {
            shift_id: row.shift_id,
            resource_id: row.resource_id,
            title: row.title,
            start: row.start,
            end: row.end,
            color: row.color,
            open_shift_group_id: row.open_shift_group_id,
            created_at: row.created_at,
        }
    }
}

impl TimedEntry for ShiftView {
    fn entry_id(&self) -> &str {
        &self.shift_id
    }

    fn resource_id(&self) -> &str {
        &self.resource_id
    }

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}
