// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Uploaded activity model for storage and API.

use crate::models::TripStatistics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// Stored activity record, keyed by (user_id, activity_id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRecord {
    /// Generated on upload (UUID v4)
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub activity_id: Uuid,
    /// Owner
    pub user_id: String,
    pub statistics: TripStatistics,
    /// Number of accepted track points
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub point_count: usize,
    /// Simplified path, encoded polyline (precision 5)
    pub preview_polyline: String,
    /// When the upload was processed
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
}

/// Source format of an uploaded track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Gpx,
    GeoJson,
}

impl UploadFormat {
    /// Map a `Content-Type` header value to a format, ignoring parameters
    /// such as `charset`.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "application/gpx+xml" => Some(Self::Gpx),
            "application/json" | "application/geo+json" => Some(Self::GeoJson),
            _ => None,
        }
    }

    /// Artifact name for the original upload.
    pub fn source_artifact(self) -> &'static str {
        match self {
            Self::Gpx => "source.gpx",
            Self::GeoJson => "source.geojson",
        }
    }
}
