use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::shifts::core::events::shift_stream_id;
use crate::modules::shifts::use_cases::schedule_shift::command::ScheduleShift;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ScheduleShiftBody {
    pub resource_id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: Option<String>,
    pub open_shift_group_id: Option<String>,
}

#[derive(Serialize)]
pub struct ScheduleShiftResponse {
    pub shift_id: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ScheduleShiftBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let shift_id = Uuid::now_v7();
    let stream_id = shift_stream_id(&shift_id.to_string());

    let command = ScheduleShift {
        shift_id: shift_id.to_string(),
        resource_id: body.resource_id,
        title: body.title,
        start: body.start,
        end: body.end,
        color: body.color,
        open_shift_group_id: body.open_shift_group_id,
        created_at: Utc::now().timestamp_millis(),
    };

    match state.schedule_shift_handler.handle(&stream_id, command).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(ScheduleShiftResponse {
                shift_id: shift_id.to_string(),
            }),
        )
            .into_response(),
        Err(ApplicationError::Domain(reason)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse { error: reason }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "scheduling shift failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
