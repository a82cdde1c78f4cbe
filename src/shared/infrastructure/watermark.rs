use async_trait::async_trait;

/// Last stream version a projector has applied, keyed by `{projector}/{stream_id}`.
#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
