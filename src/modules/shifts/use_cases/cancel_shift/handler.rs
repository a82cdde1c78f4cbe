use crate::modules::shifts::adapters::outbound::projections::ShiftProjectionRepository;
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::evolve::evolve;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::cancel_shift::command::CancelShift;
use crate::modules::shifts::use_cases::cancel_shift::decide::{DecideError, decide_cancel};
use crate::modules::shifts::use_cases::list_shifts::handler::ShiftProjector;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::watermark::WatermarkRepository;
use std::sync::Arc;

pub struct CancelShiftHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TRepository: ShiftProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    projector: Arc<ShiftProjector<TRepository, TWatermarkRepository>>,
}

impl<TEventStore, TRepository, TWatermarkRepository>
    CancelShiftHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TRepository: ShiftProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        projector: Arc<ShiftProjector<TRepository, TWatermarkRepository>>,
    ) -> Self {
        Self {
            event_store,
            projector,
        }
    }

    pub async fn handle(
        &self,
        stream_id: &str,
        command: CancelShift,
    ) -> Result<(), ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        self.projector.catch_up(stream_id, &stream.events).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(ShiftState::None, evolve);

        let events = decide_cancel(&state, command).map_err(|reason| match reason {
            DecideError::NotFound => ApplicationError::NotFound(reason.to_string()),
            DecideError::AlreadyCancelled => ApplicationError::Domain(reason.to_string()),
        })?;

        self.event_store
            .append(stream_id, stream.version, &events)
            .await?;
        for (offset, event) in events.iter().enumerate() {
            let version = stream.version + offset as i64 + 1;
            self.projector.apply_one(stream_id, version, event).await?;
        }
        tracing::info!(stream_id, "shift cancelled");
        Ok(())
    }
}
