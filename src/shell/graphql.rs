use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::calendar::use_cases::render_calendar::inbound::graphql::RenderCalendarQuery;
use crate::modules::roster::use_cases::list_roster::inbound::graphql::ListRosterQuery;
use crate::modules::roster::use_cases::toggle_group::inbound::graphql::ToggleGroupMutation;
use crate::modules::shifts::use_cases::cancel_shift::inbound::graphql::CancelShiftMutation;
use crate::modules::shifts::use_cases::list_shifts::inbound::graphql::ListShiftsQuery;
use crate::modules::shifts::use_cases::schedule_shift::inbound::graphql::ScheduleShiftMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(RenderCalendarQuery, ListRosterQuery, ListShiftsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ScheduleShiftMutation, CancelShiftMutation, ToggleGroupMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
