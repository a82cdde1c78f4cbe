// In memory roster read model, and watermark repository.
//
// Groups and resources are listed in registration order.

use crate::modules::roster::adapters::outbound::projections::RosterProjectionRepository;
use crate::modules::roster::use_cases::list_roster::projection::{
    GroupRow, GroupView, ResourceRow, ResourceView,
};
use crate::modules::roster::use_cases::list_roster::queries_port::RosterQueries;
use crate::shared::infrastructure::watermark::WatermarkRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRosterProjections {
    groups: RwLock<Vec<GroupRow>>,
    resources: RwLock<Vec<ResourceRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
}

impl InMemoryRosterProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RosterProjectionRepository for InMemoryRosterProjections {
    async fn upsert_group(&self, row: GroupRow) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.groups.write().await;
        match guard.iter_mut().find(|g| g.group_id == row.group_id) {
            Some(existing) => *existing = row,
            None => guard.push(row),
        }
        Ok(())
    }

    async fn set_group_expanded(
        &self,
        group_id: &str,
        expanded: bool,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.groups.write().await;
        let existing = guard
            .iter_mut()
            .find(|g| g.group_id == group_id)
            .ok_or_else(|| anyhow::anyhow!("group {group_id} is not projected"))?;
        *existing = GroupRow {
            group_id: existing.group_id.clone(),
            name: existing.name.clone(),
            expanded,
            last_event_id: Some(last_event_id.to_string()),
        };
        Ok(())
    }

    async fn upsert_resource(&self, row: ResourceRow) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.resources.write().await;
        match guard.iter_mut().find(|r| r.resource_id == row.resource_id) {
            Some(existing) => *existing = row,
            None => guard.push(row),
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryRosterProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl RosterQueries for InMemoryRosterProjections {
    async fn list_groups(&self) -> anyhow::Result<Vec<GroupView>> {
        self.ensure_online()?;
        let guard = self.groups.read().await;
        Ok(guard.iter().cloned().map(GroupView::from).collect())
    }

    async fn list_resources(&self) -> anyhow::Result<Vec<ResourceView>> {
        self.ensure_online()?;
        let guard = self.resources.read().await;
        Ok(guard.iter().cloned().map(ResourceView::from).collect())
    }

    async fn get_group(&self, group_id: &str) -> anyhow::Result<Option<GroupView>> {
        self.ensure_online()?;
        let guard = self.groups.read().await;
        Ok(guard
            .iter()
            .find(|g| g.group_id == group_id)
            .cloned()
            .map(GroupView::from))
    }
}
