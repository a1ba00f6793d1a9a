//! Rejected request body and parameter tests.

use axum::Router;
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::json;

use crate::rest_api::helpers::{app, send, send_json};

/// Tests that a blank title is rejected with the offending field named.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_is_rejected(app: Router) {
    let (status, body) = send_json(&app, Method::POST, "/tasks", &json!({ "title": "   " }))
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], json!("title"));
    assert_eq!(body["detail"], json!("title must not be empty or whitespace"));
}

/// Tests that an overlong title is rejected.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlong_title_is_rejected(app: Router) {
    let title = "x".repeat(201);

    let (status, body) = send_json(&app, Method::POST, "/tasks", &json!({ "title": title }))
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], json!("title"));
}

/// Tests that a due date in the past is rejected.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn past_due_date_is_rejected(app: Router) {
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/tasks",
        &json!({ "title": "Late", "due_date": "2026-02-01T00:00:00Z" }),
    )
    .await
    .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], json!("due_date"));
}

/// Tests that a patch is validated with the same rules as creation.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_blank_title_is_rejected(app: Router) {
    send_json(&app, Method::POST, "/tasks", &json!({ "title": "Fine" }))
        .await
        .expect("request should succeed");

    let (status, body) = send_json(&app, Method::PUT, "/tasks/1", &json!({ "title": "" }))
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], json!("title"));
}

/// Tests that a body without a title fails to parse.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_title_is_rejected(app: Router) {
    let (status, _body) = send_json(&app, Method::POST, "/tasks", &json!({ "priority": "low" }))
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// Tests that a status outside the closed set fails to parse.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_in_body_is_rejected(app: Router) {
    let (status, _body) = send_json(
        &app,
        Method::POST,
        "/tasks",
        &json!({ "title": "T", "status": "paused" }),
    )
    .await
    .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// Tests that an unknown status filter is rejected with the field named.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_filter_is_rejected(app: Router) {
    let (status, body) = send(&app, Method::GET, "/tasks?status=bogus")
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], json!("status"));
    assert_eq!(body["detail"], json!("unknown task status: bogus"));
}

/// Tests that an unknown sort column is rejected.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_sort_key_is_rejected(app: Router) {
    let (status, body) = send(&app, Method::GET, "/tasks?sort_by=title")
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], json!("sort_by"));
}

/// Tests that the sort order is validated even without a sort column.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_sort_order_is_rejected(app: Router) {
    let (status, body) = send(&app, Method::GET, "/tasks?sort_order=sideways")
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], json!("sort_order"));
}

/// Tests that a negative skip fails query extraction.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn negative_skip_is_rejected(app: Router) {
    let (status, _body) = send(&app, Method::GET, "/tasks?skip=-1")
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests that the status path endpoint rejects values outside the set.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_endpoint_rejects_unknown_value(app: Router) {
    let (status, body) = send(&app, Method::GET, "/tasks/status/archived")
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], json!("status"));
}

/// Tests that the priority path endpoint rejects values outside the set.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn priority_endpoint_rejects_unknown_value(app: Router) {
    let (status, body) = send(&app, Method::GET, "/tasks/priority/critical")
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], json!("priority"));
}

/// Tests that a non-numeric id segment is a bad request.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_numeric_id_is_rejected(app: Router) {
    let (status, _body) = send(&app, Method::GET, "/tasks/abc")
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
