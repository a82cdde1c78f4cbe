pub mod v1 {
    pub mod shift_cancelled;
    pub mod shift_scheduled;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ShiftEvent {
    ShiftScheduledV1(v1::shift_scheduled::ShiftScheduledV1),
    ShiftCancelledV1(v1::shift_cancelled::ShiftCancelledV1),
}

pub fn shift_stream_id(shift_id: &str) -> String {
    format!("Shift-{shift_id}")
}
