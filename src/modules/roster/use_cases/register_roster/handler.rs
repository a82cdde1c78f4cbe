// Registers groups and resources. Used by the shell to seed the default roster.

use crate::modules::roster::adapters::outbound::projections::RosterProjectionRepository;
use crate::modules::roster::core::events::{RosterEvent, group_stream_id, resource_stream_id};
use crate::modules::roster::core::evolve::{evolve_group, evolve_resource};
use crate::modules::roster::core::state::{GroupState, ResourceState};
use crate::modules::roster::use_cases::list_roster::handler::RosterProjector;
use crate::modules::roster::use_cases::register_roster::command::{RegisterGroup, RegisterResource};
use crate::modules::roster::use_cases::register_roster::decide::{
    decide_register_group, decide_register_resource,
};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::watermark::WatermarkRepository;
use std::sync::Arc;

pub struct RosterHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<RosterEvent> + Send + Sync + 'static,
    TRepository: RosterProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    projector: Arc<RosterProjector<TRepository, TWatermarkRepository>>,
}

impl<TEventStore, TRepository, TWatermarkRepository>
    RosterHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<RosterEvent> + Send + Sync + 'static,
    TRepository: RosterProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        projector: Arc<RosterProjector<TRepository, TWatermarkRepository>>,
    ) -> Self {
        Self {
            event_store,
            projector,
        }
    }

    pub async fn register_group(&self, command: RegisterGroup) -> Result<(), ApplicationError> {
        let stream_id = group_stream_id(&command.group_id);
        let stream = self.event_store.load(&stream_id).await?;
        self.projector.catch_up(&stream_id, &stream.events).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(GroupState::None, evolve_group);
        let events = decide_register_group(&state, command)
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        self.commit(&stream_id, stream.version, &events).await
    }

    pub async fn register_resource(
        &self,
        command: RegisterResource,
    ) -> Result<(), ApplicationError> {
        let stream_id = resource_stream_id(&command.resource_id);
        let stream = self.event_store.load(&stream_id).await?;
        self.projector.catch_up(&stream_id, &stream.events).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(ResourceState::None, evolve_resource);
        let events = decide_register_resource(&state, command)
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        self.commit(&stream_id, stream.version, &events).await
    }

    async fn commit(
        &self,
        stream_id: &str,
        version: i64,
        events: &[RosterEvent],
    ) -> Result<(), ApplicationError> {
        self.event_store.append(stream_id, version, events).await?;
        for (offset, event) in events.iter().enumerate() {
            self.projector
                .apply_one(stream_id, version + offset as i64 + 1, event)
                .await?;
        }
        tracing::debug!(stream_id, "roster entry registered");
        Ok(())
    }
}
