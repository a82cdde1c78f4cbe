use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::shifts::core::events::shift_stream_id;
use crate::modules::shifts::use_cases::cancel_shift::command::CancelShift;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(shift_id): Path<String>,
) -> impl IntoResponse {
    let stream_id = shift_stream_id(&shift_id);
    let command = CancelShift {
        shift_id,
        cancelled_at: Utc::now().timestamp_millis(),
    };

    match state.cancel_shift_handler.handle(&stream_id, command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(error) => {
            tracing::error!(%error, "cancelling shift failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod cancel_shift_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use tower::ServiceExt;

    use crate::modules::shifts::core::events::shift_stream_id;
    use crate::modules::shifts::use_cases::list_shifts::queries_port::ShiftQueries;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::commands::schedule_shift::ScheduleShiftBuilder;
    use crate::tests::fixtures::state::{make_offline_event_store_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/shifts/{shift_id}", delete(handle))
            .with_state(state)
    }

    async fn delete_status(state: AppState, shift_id: &str) -> StatusCode {
        app(state)
            .oneshot(
                Request::delete(format!("/shifts/{shift_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn it_should_return_204_and_remove_the_shift() {
        let state = make_test_state();
        let command = ScheduleShiftBuilder::new().build();
        state
            .schedule_shift_handler
            .handle(&shift_stream_id(&command.shift_id), command.clone())
            .await
            .unwrap();

        let status = delete_status(state.clone(), &command.shift_id).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.shift_queries.list_shifts().await.unwrap().is_empty());
        assert_eq!(
            delete_status(state, &command.shift_id).await,
            StatusCode::CONFLICT
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_shift() {
        assert_eq!(
            delete_status(make_test_state(), "shift-unknown").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn it_should_return_500_when_event_store_is_offline() {
        assert_eq!(
            delete_status(make_offline_event_store_state(), "shift-fixed-0001").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
