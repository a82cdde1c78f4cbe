// Shift projector: translates shift events into read model mutations and records,
// per stream, the last version it applied.
//
// Command handlers call `catch_up` with the stream they just loaded, so events that
// were stored while the read model was unreachable are projected before anything new.
// Applying the same event twice leaves the read model unchanged.

use crate::modules::shifts::adapters::outbound::projections::ShiftProjectionRepository;
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::projections::{Mutation, apply};
use crate::shared::infrastructure::watermark::WatermarkRepository;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct ShiftProjector<TRepository, TWatermarkRepository>
where
    TRepository: ShiftProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> ShiftProjector<TRepository, TWatermarkRepository>
where
    TRepository: ShiftProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub fn watermark_key(&self, stream_id: &str) -> String {
        format!("{}/{stream_id}", self.name)
    }

    /// Last version of `stream_id` applied to the read model, 0 when none.
    pub async fn applied_version(&self, stream_id: &str) -> anyhow::Result<i64> {
        let key = self.watermark_key(stream_id);
        match self.watermark_repository.get(&key).await? {
            Some(raw) => raw
                .parse::<i64>()
                .with_context(|| format!("watermark {key} holds {raw:?}")),
            None => Ok(0),
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &ShiftEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Remove { shift_id } => self.repository.remove(&shift_id).await?,
            }
        }
        self.watermark_repository
            .set(&self.watermark_key(stream_id), &version.to_string())
            .await?;
        Ok(())
    }

    /// Projects the events of a loaded stream past the watermark. Returns how many
    /// were applied.
    pub async fn catch_up(&self, stream_id: &str, events: &[ShiftEvent]) -> anyhow::Result<usize> {
        let applied = self.applied_version(stream_id).await?;
        let mut replayed = 0;
        for (index, event) in events.iter().enumerate() {
            let version = index as i64 + 1;
            if version <= applied {
                continue;
            }
            self.apply_one(stream_id, version, event).await?;
            replayed += 1;
        }
        if replayed > 0 {
            tracing::warn!(stream_id, replayed, "read model caught up with the event store");
        }
        Ok(replayed)
    }
}
