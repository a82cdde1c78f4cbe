// Event store port shared by the shift and roster streams.
//
// Purpose
// - Give command handlers an append-only log per stream (`Shift-{id}`, `Group-{id}`,
//   `Resource-{id}`) to fold state from.
//
// Responsibilities
// - Load the full stream with its version. The version is the number of stored
//   events, so the n-th event of a stream carries version n.
// - Append only when the caller saw the latest version, and report the mismatch
//   otherwise.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    /// Oldest first.
    pub events: Vec<E>,
    pub version: i64,
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;
    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;
}

pub mod in_memory;
