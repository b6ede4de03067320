// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Track parsing: GeoJSON point features to a validated, ordered [`Track`].
//!
//! Ordering is validated, never imposed. The first bad point rejects the
//! whole track; a partial track would produce wrong statistics, and those
//! feed mileage totals downstream.

use crate::models::{Track, TrackPoint};
use crate::time_utils::parse_timestamp;
use chrono::{DateTime, Utc};
use geojson::{Feature, FeatureCollection, GeoJson};

/// Property holding the fix time.
const TIME_PROPERTY: &str = "time";
/// Property holding the elevation in meters.
const ELEVATION_PROPERTY: &str = "ele";

/// Errors from parsing a track or deriving statistics from it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackError {
    #[error("Malformed track point at feature {index}: {reason}")]
    MalformedInput { index: usize, reason: String },

    #[error("Out-of-order timestamp at feature {index}: {current} is earlier than {previous}")]
    OutOfOrder {
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },

    #[error("Track has no points")]
    EmptyTrack,
}

impl TrackError {
    /// Stable error code for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackError::MalformedInput { .. } => "malformed_input",
            TrackError::OutOfOrder { .. } => "out_of_order",
            TrackError::EmptyTrack => "empty_track",
        }
    }

    fn malformed(index: usize, reason: impl Into<String>) -> Self {
        TrackError::MalformedInput {
            index,
            reason: reason.into(),
        }
    }
}

/// Parse a GeoJSON document into a track.
pub fn parse_geojson(json_data: &str) -> Result<Track, TrackError> {
    parse_features(&read_feature_collection(json_data)?)
}

/// Read a GeoJSON document as a feature collection.
///
/// A single Feature is wrapped in a collection; a bare Geometry carries no
/// timestamps and is rejected.
pub fn read_feature_collection(json_data: &str) -> Result<FeatureCollection, TrackError> {
    let geojson: GeoJson = json_data
        .parse()
        .map_err(|e: geojson::Error| TrackError::malformed(0, format!("invalid GeoJSON: {}", e)))?;

    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(feature) => Ok(FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        }),
        GeoJson::Geometry(_) => Err(TrackError::malformed(
            0,
            "expected a Feature or FeatureCollection, got a bare Geometry",
        )),
    }
}

/// Convert point features into a track, in input order.
///
/// Features whose geometry is not a Point are skipped.
pub fn parse_features(collection: &FeatureCollection) -> Result<Track, TrackError> {
    let mut points = Vec::with_capacity(collection.features.len());
    let mut previous: Option<DateTime<Utc>> = None;

    for (index, feature) in collection.features.iter().enumerate() {
        let Some(coordinates) = point_coordinates(feature) else {
            continue;
        };

        let timestamp = read_timestamp(index, feature)?;
        if let Some(previous) = previous {
            if timestamp < previous {
                return Err(TrackError::OutOfOrder {
                    index,
                    previous,
                    current: timestamp,
                });
            }
        }
        previous = Some(timestamp);

        let longitude = *coordinates
            .first()
            .ok_or_else(|| TrackError::malformed(index, "missing longitude"))?;
        let latitude = *coordinates
            .get(1)
            .ok_or_else(|| TrackError::malformed(index, "missing latitude"))?;
        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(TrackError::malformed(index, "non-finite coordinate"));
        }

        points.push(TrackPoint {
            timestamp,
            longitude,
            latitude,
            elevation: read_elevation(index, feature)?,
        });
    }

    tracing::debug!(
        features = collection.features.len(),
        points = points.len(),
        "Parsed track"
    );
    Ok(Track::new(points))
}

/// Coordinates of a Point feature, `None` for anything else.
fn point_coordinates(feature: &Feature) -> Option<&[f64]> {
    match &feature.geometry.as_ref()?.value {
        geojson::Value::Point(position) => Some(position.as_slice()),
        _ => None,
    }
}

fn read_timestamp(index: usize, feature: &Feature) -> Result<DateTime<Utc>, TrackError> {
    let raw = feature
        .property(TIME_PROPERTY)
        .ok_or_else(|| TrackError::malformed(index, "missing timestamp"))?;

    let text = raw
        .as_str()
        .ok_or_else(|| TrackError::malformed(index, format!("timestamp is not a string: {}", raw)))?;

    parse_timestamp(text)
        .ok_or_else(|| TrackError::malformed(index, format!("unparseable timestamp {:?}", text)))
}

/// Missing or null elevation is absent; anything else must be a number.
fn read_elevation(index: usize, feature: &Feature) -> Result<Option<f64>, TrackError> {
    match feature.property(ELEVATION_PROPERTY) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| TrackError::malformed(index, format!("elevation is not a number: {}", value))),
    }
}
