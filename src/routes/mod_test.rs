use super::*;
use axum::body::{self, Body};
use axum::http::Request;
use records::{DeliveryStatus, SaveOutcome};
use tower::ServiceExt;

use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn healthz_returns_ok() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(test_app_state(dir.path()))
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn save_result_route_returns_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let body = r#"{"record_id":"R9","imaging_date":"2025-07-01","T_stage":"T1c"}"#;
    let response = app(test_app_state(dir.path()))
        .oneshot(
            Request::post("/api/save-result")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let outcome: SaveOutcome = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(outcome.mode, SaveMode::Final);
    assert_eq!(outcome.local, DeliveryStatus::Delivered);
    assert!(dir.path().join("final/R9_2025-07-01.json").exists());
}

#[tokio::test]
async fn save_before_result_route_files_drafts() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(test_app_state(dir.path()))
        .oneshot(
            Request::post("/api/save-before-result")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"record_id":"D1","imaging_date":"2025-07-02"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(dir.path().join("draft/D1_2025-07-02.json").exists());
}

#[tokio::test]
async fn non_object_body_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(test_app_state(dir.path()))
        .oneshot(
            Request::post("/api/save-result")
                .header("content-type", "application/json")
                .body(Body::from("[1,2,3]"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}
