use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::shifts::core::events::shift_stream_id;
use crate::modules::shifts::use_cases::cancel_shift::command::CancelShift;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CancelShiftMutation;

#[Object]
impl CancelShiftMutation {
    async fn cancel_shift(&self, context: &Context<'_>, shift_id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let stream_id = shift_stream_id(&shift_id);
        let command = CancelShift {
            shift_id: shift_id.to_string(),
            cancelled_at: Utc::now().timestamp_millis(),
        };

        state
            .cancel_shift_handler
            .handle(&stream_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.user_message()))?;

        Ok(shift_id)
    }
}
