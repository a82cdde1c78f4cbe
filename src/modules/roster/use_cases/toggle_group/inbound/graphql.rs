use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::roster::use_cases::list_roster::inbound::graphql::GqlGroup;
use crate::modules::roster::use_cases::toggle_group::command::ToggleGroupExpansion;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ToggleGroupMutation;

#[Object]
impl ToggleGroupMutation {
    async fn toggle_group_expansion(
        &self,
        context: &Context<'_>,
        group_id: ID,
    ) -> GqlResult<GqlGroup> {
        let state = context.data_unchecked::<AppState>();
        let group = state
            .toggle_group_handler
            .handle(ToggleGroupExpansion {
                group_id: group_id.to_string(),
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.user_message()))?;
        Ok(group.into())
    }
}
