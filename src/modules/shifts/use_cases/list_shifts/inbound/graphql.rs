use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::shifts::use_cases::list_shifts::projection::ShiftView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlShift {
    pub shift_id: String,
    pub resource_id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: Option<String>,
    pub open_shift_group_id: Option<String>,
    pub created_at: i64,
}

impl From<ShiftView> for GqlShift {
    fn from(v: ShiftView) -> Self {
        Self {
            shift_id: v.shift_id,
            resource_id: v.resource_id,
            title: v.title,
            start: v.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end: v.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
            color: v.color,
            open_shift_group_id: v.open_shift_group_id,
            created_at: v.created_at,
        }
    }
}

#[derive(Default)]
pub struct ListShiftsQuery;

#[Object]
impl ListShiftsQuery {
    async fn shifts(&self, context: &Context<'_>) -> GqlResult<Vec<GqlShift>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.shift_queries.list_shifts().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
