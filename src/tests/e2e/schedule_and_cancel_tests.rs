use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_seeded_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn post_shift(body: String) -> Request<Body> {
    Request::post("/shifts")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn schedules_an_open_shift_and_cancels_it_over_http() {
    let app = router(make_seeded_state().await);

    let body = serde_json::json!({
        "resource_id": "open-shift-resource-id",
        "title": "  Cover ",
        "start": "2025-05-26T09:00",
        "end": "2025-05-26T13:00",
        "open_shift_group_id": "group-support",
    });
    let (status, created) = send(&app, post_shift(body.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    let shift_id = created["shift_id"].as_str().unwrap().to_string();

    let (status, shifts) = send(&app, Request::get("/shifts").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shifts[0]["shift_id"], shift_id.as_str());
    assert_eq!(shifts[0]["title"], "Open Shift for Customer Support: Cover");
    assert_eq!(shifts[0]["open_shift_group_id"], "group-support");
    assert_eq!(shifts[0]["start"], "2025-05-26T09:00:00");

    let (status, calendar) = send(
        &app,
        Request::get("/calendar?view=day&date=2025-05-26")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(calendar["layout"]["items"][0]["entry_id"], shift_id.as_str());
    assert_eq!(calendar["layout"]["items"][0]["bucket_index"], 9);

    let (status, _) = send(
        &app,
        Request::delete(format!("/shifts/{shift_id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, shifts) = send(&app, Request::get("/shifts").body(Body::empty()).unwrap()).await;
    assert_eq!(shifts, serde_json::json!([]));
}

#[tokio::test]
async fn reports_each_validation_failure_in_order() {
    let app = router(make_seeded_state().await);
    let cases = [
        (
            serde_json::json!({"resource_id": "res-1", "title": "T", "start": "soon", "end": "2025-05-26T13:00"}),
            "Invalid start time",
        ),
        (
            serde_json::json!({"resource_id": "res-1", "title": "T", "start": "2025-05-26T09:00", "end": "later"}),
            "Invalid end time",
        ),
        (
            serde_json::json!({"resource_id": "", "title": "", "start": "2025-05-26T09:00", "end": "2025-05-26T09:00"}),
            "End time must be after start time",
        ),
        (
            serde_json::json!({"resource_id": "", "title": "", "start": "2025-05-26T09:00", "end": "2025-05-26T13:00"}),
            "Please select a resource",
        ),
        (
            serde_json::json!({"resource_id": "res-1", "title": " ", "start": "2025-05-26T09:00", "end": "2025-05-26T13:00"}),
            "Title is required",
        ),
        (
            serde_json::json!({"resource_id": "open-shift-resource-id", "title": "Cover", "start": "2025-05-26T09:00", "end": "2025-05-26T13:00"}),
            "Please select a group for the open shift",
        ),
    ];

    for (body, expected) in cases {
        let (status, json) = send(&app, post_shift(body.to_string())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{expected}");
        assert_eq!(json["error"], expected);
    }

    let (_, shifts) = send(&app, Request::get("/shifts").body(Body::empty()).unwrap()).await;
    assert_eq!(shifts, serde_json::json!([]));
}

#[tokio::test]
async fn collapses_and_expands_a_group_over_http() {
    let app = router(make_seeded_state().await);
    let toggle = || {
        Request::post("/groups/group-ops/toggle")
            .body(Body::empty())
            .unwrap()
    };

    let (status, group) = send(&app, toggle()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(group["expanded"], false);

    let (_, groups) = send(&app, Request::get("/groups").body(Body::empty()).unwrap()).await;
    let ops = groups
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["group_id"] == "group-ops")
        .unwrap();
    assert_eq!(ops["expanded"], false);

    let (_, group) = send(&app, toggle()).await;
    assert_eq!(group["expanded"], true);
}
