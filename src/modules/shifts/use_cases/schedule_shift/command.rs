/// A shift as typed into the creation form. `start` and `end` are raw strings and are
/// parsed by the decider.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleShift {
    pub shift_id: String,
    pub resource_id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: Option<String>,
    pub open_shift_group_id: Option<String>,
    pub created_at: i64,
}
