use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::modules::calendar::core::view_mode::ViewMode;
use crate::modules::calendar::use_cases::render_calendar::handler::RenderError;
use crate::modules::calendar::use_cases::render_calendar::query::RenderCalendar;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RenderCalendarParams {
    pub view: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<RenderCalendarParams>,
) -> impl IntoResponse {
    let view_mode = match params.view.as_deref().map(str::parse::<ViewMode>) {
        None => ViewMode::Week,
        Some(Ok(view_mode)) => view_mode,
        Some(Err(error)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response();
        }
    };
    let anchor = params.date.unwrap_or_else(|| Local::now().date_naive());

    match state
        .render_calendar_handler
        .handle(RenderCalendar { view_mode, anchor })
        .await
    {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(RenderError::Calendar(error)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        )
            .into_response(),
        Err(RenderError::Store(error)) => {
            tracing::error!(%error, "calendar render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
