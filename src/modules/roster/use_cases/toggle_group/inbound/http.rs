use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::roster::use_cases::toggle_group::command::ToggleGroupExpansion;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> impl IntoResponse {
    match state
        .toggle_group_handler
        .handle(ToggleGroupExpansion { group_id })
        .await
    {
        Ok(group) => Json(group).into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, "toggling group failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
