#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelShift {
    pub shift_id: String,
    pub cancelled_at: i64,
}
