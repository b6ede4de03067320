// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity processing service.
//!
//! Handles the upload workflow:
//! 1. Decode the upload (GPX is converted to GeoJSON point features)
//! 2. Parse and validate the track
//! 3. Compute trip statistics
//! 4. Simplify the path and build the map preview request
//! 5. Store artifacts, then the activity record

use crate::db::{artifacts, ActivityStore};
use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, MapPreview, Track, TripStatistics, UploadFormat};
use crate::services::gpx_convert::gpx_to_features;
use crate::services::preview::{build_map_preview, simplify_track, PreviewSettings};
use crate::services::statistics::compute_statistics;
use crate::services::track_parser::{parse_features, read_feature_collection, TrackError};
use geojson::FeatureCollection;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Process uploaded tracks into stored activities.
#[derive(Clone)]
pub struct ActivityProcessor {
    store: Arc<dyn ActivityStore>,
    preview_settings: PreviewSettings,
}

impl ActivityProcessor {
    pub fn new(store: Arc<dyn ActivityStore>, preview_settings: PreviewSettings) -> Self {
        Self {
            store,
            preview_settings,
        }
    }

    /// Decode an upload body into GeoJSON point features.
    pub fn decode_features(&self, format: UploadFormat, body: &[u8]) -> Result<FeatureCollection> {
        match format {
            UploadFormat::Gpx => {
                gpx_to_features(body).map_err(|e| AppError::BadRequest(e.to_string()))
            }
            UploadFormat::GeoJson => {
                let text = std::str::from_utf8(body)
                    .map_err(|_| AppError::BadRequest("Body is not valid UTF-8".to_string()))?;
                Ok(read_feature_collection(text)?)
            }
        }
    }

    /// Decode and parse an upload into a track.
    pub fn parse_track(&self, format: UploadFormat, body: &[u8]) -> Result<Track> {
        let features = self.decode_features(format, body)?;
        Ok(parse_features(&features)?)
    }

    /// Statistics for an upload, without storing anything.
    pub fn statistics_for(&self, format: UploadFormat, body: &[u8]) -> Result<TripStatistics> {
        let track = self.parse_track(format, body)?;
        Ok(compute_statistics(&track)?)
    }

    /// Map preview for an upload, without storing anything.
    pub fn preview_for(&self, format: UploadFormat, body: &[u8]) -> Result<MapPreview> {
        let track = self.parse_track(format, body)?;
        self.preview_for_track(&track)
    }

    fn preview_for_track(&self, track: &Track) -> Result<MapPreview> {
        if track.is_empty() {
            return Err(TrackError::EmptyTrack.into());
        }
        let path = simplify_track(track);
        build_map_preview(&path, &self.preview_settings)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }

    /// Process an upload for a user and store the resulting activity.
    ///
    /// Nothing is written unless the whole track parses and validates.
    pub fn process_upload(
        &self,
        user_id: &str,
        format: UploadFormat,
        body: &[u8],
    ) -> Result<ProcessResult> {
        let activity_id = Uuid::new_v4();
        tracing::info!(
            user_id,
            %activity_id,
            ?format,
            bytes = body.len(),
            "Processing upload"
        );

        // 1-2. Decode and parse
        let features = self.decode_features(format, body)?;
        let track = parse_features(&features)?;

        // 3. Statistics
        let statistics = compute_statistics(&track)?;

        // 4. Preview
        let preview = self.preview_for_track(&track)?;

        tracing::info!(
            %activity_id,
            points = track.len(),
            preview_points = preview.line.coordinates.len(),
            distance_meters = statistics.distance_meters,
            elapsed_seconds = statistics.elapsed_seconds,
            "Track processed"
        );

        // 5. Store artifacts, then the record that points at them
        let blobs = [
            (format.source_artifact(), body.to_vec()),
            (artifacts::GEOJSON, to_json_bytes(&features)?),
            (artifacts::ACTIVITY_DATA, to_json_bytes(&track)?),
            (artifacts::PREVIEW, to_json_bytes(&preview)?),
        ];
        for (name, data) in blobs {
            self.store
                .put_artifact(&artifacts::key(activity_id, name), data)?;
        }

        let record = ActivityRecord {
            activity_id,
            user_id: user_id.to_string(),
            statistics,
            point_count: track.len(),
            preview_polyline: preview.line.polyline,
            created_at: chrono::Utc::now(),
        };
        self.store.upsert_activity(&record)?;

        tracing::info!(user_id, %activity_id, "Activity stored");

        Ok(ProcessResult {
            activity_id,
            statistics,
        })
    }
}

/// Result of processing an upload.
#[derive(Debug)]
pub struct ProcessResult {
    pub activity_id: Uuid,
    pub statistics: TripStatistics,
}

fn to_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Serialization error: {}", e)))
}
