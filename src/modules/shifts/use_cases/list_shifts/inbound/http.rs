use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.shift_queries.list_shifts().await {
        Ok(shifts) => Json(shifts).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing shifts failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
