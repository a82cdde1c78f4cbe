use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    ReadModel(#[from] anyhow::Error),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    /// Message meant for the person who issued the command.
    pub fn user_message(&self) -> String {
        match self {
            ApplicationError::Domain(reason) | ApplicationError::NotFound(reason) => reason.clone(),
            other => other.to_string(),
        }
    }
}
