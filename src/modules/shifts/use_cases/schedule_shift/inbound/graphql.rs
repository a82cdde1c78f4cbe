use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::shifts::core::events::shift_stream_id;
use crate::modules::shifts::use_cases::schedule_shift::command::ScheduleShift;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ScheduleShiftMutation;

#[Object]
impl ScheduleShiftMutation {
    #[allow(clippy::too_many_arguments)]
    async fn schedule_shift(
        &self,
        context: &Context<'_>,
        resource_id: String,
        title: String,
        start: String,
        end: String,
        color: Option<String>,
        open_shift_group_id: Option<String>,
    ) -> GqlResult<ID> {
        let shift_id = Uuid::now_v7();
        let state = context.data_unchecked::<AppState>();

        let command = ScheduleShift {
            shift_id: shift_id.to_string(),
            resource_id,
            title,
            start,
            end,
            color,
            open_shift_group_id,
            created_at: Utc::now().timestamp_millis(),
        };

        let stream_id = shift_stream_id(&shift_id.to_string());

        state
            .schedule_shift_handler
            .handle(&stream_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.user_message()))?;

        Ok(ID(shift_id.to_string()))
    }
}
