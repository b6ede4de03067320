// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::DateTime;
use outsidely::error::AppError;
use outsidely::services::TrackError;

#[test]
fn test_track_error_kinds() {
    let malformed = TrackError::MalformedInput {
        index: 2,
        reason: "missing timestamp".to_string(),
    };
    assert_eq!(malformed.kind(), "malformed_input");

    let t = DateTime::from_timestamp(1_704_103_200, 0).unwrap();
    let out_of_order = TrackError::OutOfOrder {
        index: 1,
        previous: t,
        current: t - chrono::Duration::seconds(1),
    };
    assert_eq!(out_of_order.kind(), "out_of_order");

    assert_eq!(TrackError::EmptyTrack.kind(), "empty_track");
}

#[test]
fn test_track_errors_are_unprocessable() {
    let err: AppError = TrackError::EmptyTrack.into();
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn test_status_mapping() {
    assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        AppError::NotFound("x".to_string()).status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::BadRequest("x".to_string()).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::UnsupportedMediaType("text/csv".to_string()).status(),
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    );
    assert_eq!(
        AppError::Database("down".to_string()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::Internal(anyhow::anyhow!("boom")).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_internal_error_details_hidden() {
    let response = AppError::Internal(anyhow::anyhow!("secret path /etc/x")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());
}
