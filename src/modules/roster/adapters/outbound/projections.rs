use crate::modules::roster::use_cases::list_roster::projection::{GroupRow, ResourceRow};
use async_trait::async_trait;

#[async_trait]
pub trait RosterProjectionRepository: Send + Sync {
    async fn upsert_group(&self, row: GroupRow) -> anyhow::Result<()>;
    /// Replaces the stored group record with one carrying the new flag.
    async fn set_group_expanded(
        &self,
        group_id: &str,
        expanded: bool,
        last_event_id: &str,
    ) -> anyhow::Result<()>;
    async fn upsert_resource(&self, row: ResourceRow) -> anyhow::Result<()>;
}
