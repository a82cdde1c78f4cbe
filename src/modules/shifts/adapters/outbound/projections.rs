use crate::modules::shifts::use_cases::list_shifts::projection::ShiftRow;
use async_trait::async_trait;

#[async_trait]
pub trait ShiftProjectionRepository: Send + Sync {
    async fn upsert(&self, row: ShiftRow) -> anyhow::Result<()>;
    async fn remove(&self, shift_id: &str) -> anyhow::Result<()>;
}
