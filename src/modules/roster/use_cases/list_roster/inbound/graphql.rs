use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::roster::use_cases::list_roster::projection::{GroupView, ResourceView};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlGroup {
    pub group_id: String,
    pub name: String,
    pub expanded: bool,
}

impl From<GroupView> for GqlGroup {
    fn from(v: GroupView) -> Self {
        Self {
            group_id: v.group_id,
            name: v.name,
            expanded: v.expanded,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlResource {
    pub resource_id: String,
    pub name: String,
    pub color: String,
    pub group_id: String,
}

impl From<ResourceView> for GqlResource {
    fn from(v: ResourceView) -> Self {
        Self {
            resource_id: v.resource_id,
            name: v.name,
            color: v.color,
            group_id: v.group_id,
        }
    }
}

#[derive(Default)]
pub struct ListRosterQuery;

#[Object]
impl ListRosterQuery {
    async fn groups(&self, context: &Context<'_>) -> GqlResult<Vec<GqlGroup>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.roster_queries.list_groups().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn resources(&self, context: &Context<'_>) -> GqlResult<Vec<GqlResource>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.roster_queries.list_resources().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
