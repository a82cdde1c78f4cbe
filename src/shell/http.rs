use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::modules::calendar::use_cases::render_calendar::inbound::http as calendar_http;
use crate::modules::roster::use_cases::list_roster::inbound::http as roster_http;
use crate::modules::roster::use_cases::toggle_group::inbound::http as toggle_http;
use crate::modules::shifts::use_cases::cancel_shift::inbound::http as cancel_http;
use crate::modules::shifts::use_cases::list_shifts::inbound::http as list_shifts_http;
use crate::modules::shifts::use_cases::schedule_shift::inbound::http as schedule_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/calendar", get(calendar_http::handle))
        .route("/groups", get(roster_http::list_groups))
        .route("/groups/{group_id}/toggle", post(toggle_http::handle))
        .route("/resources", get(roster_http::list_resources))
        .route(
            "/shifts",
            get(list_shifts_http::handle).post(schedule_http::handle),
        )
        .route("/shifts/{shift_id}", delete(cancel_http::handle))
        .with_state(state)
}
