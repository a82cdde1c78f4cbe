use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn list_groups(State(state): State<AppState>) -> impl IntoResponse {
    match state.roster_queries.list_groups().await {
        Ok(groups) => Json(groups).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing groups failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list_resources(State(state): State<AppState>) -> impl IntoResponse {
    match state.roster_queries.list_resources().await {
        Ok(resources) => Json(resources).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing resources failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
