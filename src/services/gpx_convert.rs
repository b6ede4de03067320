// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GPX to GeoJSON conversion.
//!
//! Emits one Point feature per track point, across all tracks and segments
//! in document order, shaped like GDAL's `track_points` layer.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;
use std::io::Read;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Read a GPX document and convert its track points to GeoJSON features.
pub fn gpx_to_features<R: Read>(reader: R) -> Result<FeatureCollection, ConvertError> {
    let gpx = gpx::read(reader).map_err(|e| ConvertError::GpxError(e.to_string()))?;

    let mut features = Vec::new();
    for (track_fid, track) in gpx.tracks.iter().enumerate() {
        for (seg_id, segment) in track.segments.iter().enumerate() {
            for (seg_point_id, waypoint) in segment.points.iter().enumerate() {
                let mut properties = JsonObject::new();
                properties.insert("track_fid".to_string(), json!(track_fid));
                properties.insert("track_seg_id".to_string(), json!(seg_id));
                properties.insert("track_seg_point_id".to_string(), json!(seg_point_id));

                if let Some(elevation) = waypoint.elevation {
                    properties.insert("ele".to_string(), json!(elevation));
                }
                if let Some(time) = waypoint.time.clone() {
                    let formatted = OffsetDateTime::from(time)
                        .format(&Rfc3339)
                        .map_err(|e| ConvertError::TimeError(e.to_string()))?;
                    properties.insert("time".to_string(), json!(formatted));
                }

                let point = waypoint.point();
                features.push(Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(vec![point.x(), point.y()]))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                });
            }
        }
    }

    tracing::debug!(
        tracks = gpx.tracks.len(),
        points = features.len(),
        "Converted GPX to GeoJSON"
    );

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Errors from GPX conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to parse GPX: {0}")]
    GpxError(String),

    #[error("Failed to format point time: {0}")]
    TimeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SEGMENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <name>Morning Ride</name>
    <trkseg>
      <trkpt lat="42.0" lon="-71.0"><ele>10</ele><time>2024-01-01T10:00:00Z</time></trkpt>
      <trkpt lat="42.001" lon="-71.001"><time>2024-01-01T10:01:00Z</time></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="42.002" lon="-71.002"><ele>8</ele><time>2024-01-01T10:02:00Z</time></trkpt>
    </trkseg>
  </trk>
</gpx>"#;

    #[test]
    fn test_converts_all_segments_in_order() {
        let collection = gpx_to_features(TWO_SEGMENTS.as_bytes()).unwrap();
        assert_eq!(collection.features.len(), 3);

        let last = &collection.features[2];
        assert_eq!(last.property("track_seg_id"), Some(&json!(1)));
        assert_eq!(last.property("track_seg_point_id"), Some(&json!(0)));
        match &last.geometry.as_ref().unwrap().value {
            Value::Point(coords) => assert_eq!(coords, &vec![-71.002, 42.002]),
            other => panic!("Expected Point, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_elevation_omitted() {
        let collection = gpx_to_features(TWO_SEGMENTS.as_bytes()).unwrap();

        assert_eq!(collection.features[0].property("ele"), Some(&json!(10.0)));
        assert_eq!(collection.features[1].property("ele"), None);
        assert_eq!(
            collection.features[1].property("time"),
            Some(&json!("2024-01-01T10:01:00Z"))
        );
    }

    #[test]
    fn test_invalid_gpx_rejected() {
        let result = gpx_to_features("<gpx><trk>".as_bytes());
        assert!(matches!(result, Err(ConvertError::GpxError(_))));
    }
}
