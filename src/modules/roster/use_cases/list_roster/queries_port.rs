use crate::modules::roster::use_cases::list_roster::projection::{GroupView, ResourceView};
use async_trait::async_trait;

#[async_trait]
pub trait RosterQueries {
    async fn list_groups(&self) -> anyhow::Result<Vec<GroupView>>;
    async fn list_resources(&self) -> anyhow::Result<Vec<ResourceView>>;
    async fn get_group(&self, group_id: &str) -> anyhow::Result<Option<GroupView>>;
}
