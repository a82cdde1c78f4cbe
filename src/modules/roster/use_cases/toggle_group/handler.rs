use crate::modules::roster::adapters::outbound::projections::RosterProjectionRepository;
use crate::modules::roster::core::events::{RosterEvent, group_stream_id};
use crate::modules::roster::core::evolve::evolve_group;
use crate::modules::roster::core::state::GroupState;
use crate::modules::roster::use_cases::list_roster::handler::RosterProjector;
use crate::modules::roster::use_cases::list_roster::projection::GroupView;
use crate::modules::roster::use_cases::toggle_group::command::ToggleGroupExpansion;
use crate::modules::roster::use_cases::toggle_group::decide::decide_toggle;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::watermark::WatermarkRepository;
use std::sync::Arc;

pub struct ToggleGroupHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<RosterEvent> + Send + Sync + 'static,
    TRepository: RosterProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    projector: Arc<RosterProjector<TRepository, TWatermarkRepository>>,
}

impl<TEventStore, TRepository, TWatermarkRepository>
    ToggleGroupHandler<TEventStore, TRepository, TWatermarkRepository>
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

    /// Returns the group as it reads after the toggle.
    pub async fn handle(
        &self,
        command: ToggleGroupExpansion,
    ) -> Result<GroupView, ApplicationError> {
        let stream_id = group_stream_id(&command.group_id);
        let stream = self.event_store.load(&stream_id).await?;
        self.projector.catch_up(&stream_id, &stream.events).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(GroupState::None, evolve_group);

        let events = decide_toggle(&state, command)
            .map_err(|reason| ApplicationError::NotFound(reason.to_string()))?;

        self.event_store
            .append(&stream_id, stream.version, &events)
            .await?;
        for (offset, event) in events.iter().enumerate() {
            let version = stream.version + offset as i64 + 1;
            self.projector.apply_one(&stream_id, version, event).await?;
        }

        match events.into_iter().fold(state, evolve_group) {
            GroupState::Registered {
                group_id,
                name,
                expanded,
            } => {
                tracing::info!(%group_id, expanded, "group expansion toggled");
                Ok(GroupView {
                    group_id,
                    name,
                    expanded,
                })
            }
            GroupState::None => Err(ApplicationError::NotFound(stream_id)),
        }
    }
}
