#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ShiftCancelledV1 {
    pub shift_id: String,
    pub cancelled_at: i64,
}
