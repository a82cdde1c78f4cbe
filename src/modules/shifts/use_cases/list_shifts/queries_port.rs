use crate::modules::shifts::use_cases::list_shifts::projection::ShiftView;
use async_trait::async_trait;

#[async_trait]
pub trait ShiftQueries {
    /// Every live shift, in the order the shifts were scheduled.
    async fn list_shifts(&self) -> anyhow::Result<Vec<ShiftView>>;
}
