// In memory shift read model, and watermark repository.
//
// Rows are kept in scheduling order so the stacked layout can fall back on
// insertion order when two shifts start at the same minute.

use crate::modules::shifts::adapters::outbound::projections::ShiftProjectionRepository;
use crate::modules::shifts::use_cases::list_shifts::projection::{ShiftRow, ShiftView};
use crate::modules::shifts::use_cases::list_shifts::queries_port::ShiftQueries;
use crate::shared::infrastructure::watermark::WatermarkRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryShiftProjections {
    rows: RwLock<Vec<ShiftRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
}

impl InMemoryShiftProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl ShiftProjectionRepository for InMemoryShiftProjections {
    async fn upsert(&self, row: ShiftRow) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let mut guard = self.rows.write().await;
        match guard.iter_mut().find(|r| r.shift_id == row.shift_id) {
            Some(existing) => *existing = row,
            None => guard.push(row),
        }
        Ok(())
    }

    async fn remove(&self, shift_id: &str) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        self.rows.write().await.retain(|r| r.shift_id != shift_id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryShiftProjections {
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
impl ShiftQueries for InMemoryShiftProjections {
    async fn list_shifts(&self) -> anyhow::Result<Vec<ShiftView>> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let guard = self.rows.read().await;
        Ok(guard.iter().cloned().map(ShiftView::from).collect())
    }
}
