// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use outsidely::config::{Config, TEST_PASSWORD, TEST_USER};
use outsidely::db::MemoryStore;
use outsidely::routes::create_router;
use outsidely::AppState;
use std::sync::Arc;

/// Three-point track used across tests: ~277 m, +5 m / -7 m, 120 s.
#[allow(dead_code)]
pub const MORNING_RIDE_GEOJSON: &str = include_str!("../fixtures/morning_ride.geojson");
#[allow(dead_code)]
pub const MORNING_RIDE_GPX: &str = include_str!("../fixtures/morning_ride.gpx");

/// Create a test app over an empty in-memory store.
/// Returns the router, the shared state, and the store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState::new(Config::default(), store.clone()));
    (create_router(state.clone()), state, store)
}

/// `Authorization` header value for the default test user.
#[allow(dead_code)]
pub fn test_auth_header() -> String {
    basic_auth(TEST_USER, TEST_PASSWORD)
}

#[allow(dead_code)]
pub fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

/// Authenticated POST with the given content type.
#[allow(dead_code)]
pub fn post(uri: &str, content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, test_auth_header())
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

/// Authenticated GET.
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, test_auth_header())
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
