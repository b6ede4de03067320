// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{ActivityRecord, MapPreview, TripStatistics, UploadFormat};
use crate::services::gpx_to_features;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// How far back the activity feed reaches.
const FEED_WINDOW_DAYS: i64 = 7;

/// API routes (require authentication).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities).post(upload_activity))
        .route("/api/activities/{activity_id}", get(get_activity))
        .route("/api/statistics", post(create_statistics))
        .route("/api/preview", post(create_preview))
        .route("/api/convert", post(convert_gpx))
}

/// Upload format from the request `Content-Type`.
fn upload_format(headers: &HeaderMap) -> Result<UploadFormat> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    UploadFormat::from_content_type(content_type).ok_or_else(|| {
        if content_type.is_empty() {
            AppError::UnsupportedMediaType("missing Content-Type".to_string())
        } else {
            AppError::UnsupportedMediaType(content_type.to_string())
        }
    })
}

/// Run CPU-bound track work off the async executor.
async fn run_blocking<T, F>(work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Track processing task failed: {}", e)))?
}

// ─── Activities ──────────────────────────────────────────────

/// Response for a successful upload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UploadResponse {
    pub message: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub activity_id: Uuid,
    pub statistics: TripStatistics,
}

/// Upload a GPX or GeoJSON track and store the resulting activity.
async fn upload_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<UploadResponse>)> {
    let format = upload_format(&headers)?;
    let processor = state.activity_processor.clone();
    let user_id = user.user_id.clone();

    let result =
        run_blocking(move || processor.process_upload(&user_id, format, &body)).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Successfully created activity".to_string(),
            activity_id: result.activity_id,
            statistics: result.statistics,
        }),
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivityRecord>,
    /// Oldest creation time included in the feed
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub since: DateTime<Utc>,
}

/// Activity feed: everything uploaded in the last week, newest first.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ActivitiesResponse>> {
    let since = Utc::now() - Duration::days(FEED_WINDOW_DAYS);
    let activities = state.store.list_activities_since(since)?;

    tracing::debug!(
        user_id = %user.user_id,
        count = activities.len(),
        "Fetched activity feed"
    );

    Ok(Json(ActivitiesResponse { activities, since }))
}

/// Get one of the current user's activities.
async fn get_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(activity_id): Path<Uuid>,
) -> Result<Json<ActivityRecord>> {
    state
        .store
        .get_activity(&user.user_id, activity_id)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", activity_id)))
}

// ─── Track Utilities ─────────────────────────────────────────

/// Statistics for a track without storing it.
async fn create_statistics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<TripStatistics>> {
    let format = upload_format(&headers)?;
    let processor = state.activity_processor.clone();

    let statistics = run_blocking(move || processor.statistics_for(format, &body)).await?;
    Ok(Json(statistics))
}

/// Map preview request for a track without storing it.
async fn create_preview(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MapPreview>> {
    let format = upload_format(&headers)?;
    let processor = state.activity_processor.clone();

    let preview = run_blocking(move || processor.preview_for(format, &body)).await?;
    Ok(Json(preview))
}

/// Convert a GPX upload to GeoJSON track points.
async fn convert_gpx(headers: HeaderMap, body: Bytes) -> Result<impl IntoResponse> {
    if upload_format(&headers)? != UploadFormat::Gpx {
        return Err(AppError::UnsupportedMediaType(
            "conversion requires application/gpx+xml".to_string(),
        ));
    }

    let collection = gpx_to_features(body.as_ref()).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let geojson = serde_json::to_string(&collection)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Serialization error: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, "application/geo+json")], geojson))
}
