// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Preview geometry: simplified track path and static map render requests.

use crate::models::preview::SimplifiedPath;
use crate::models::{LineOverlay, MapPreview, Track};
use geo::{Coord, LineString, Simplify};

/// Douglas-Peucker tolerance, in coordinate degrees.
pub const SIMPLIFY_TOLERANCE_DEGREES: f64 = 0.0001;

/// Encoded polyline precision (5 decimal places).
const POLYLINE_PRECISION: u32 = 5;

/// Default basemap for preview images.
pub const DEFAULT_TILE_URL_TEMPLATE: &str = "http://a.tile.osm.org/{z}/{x}/{y}.png";

/// Canvas and styling for preview maps.
#[derive(Debug, Clone)]
pub struct PreviewSettings {
    pub width: u32,
    pub height: u32,
    pub padding_x: u32,
    pub padding_y: u32,
    pub tile_url_template: String,
    pub line_color: String,
    pub line_width: u32,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            width: 360,
            height: 360,
            padding_x: 10,
            padding_y: 10,
            tile_url_template: DEFAULT_TILE_URL_TEMPLATE.to_string(),
            line_color: "red".to_string(),
            line_width: 3,
        }
    }
}

impl PreviewSettings {
    pub fn with_tile_url_template(template: impl Into<String>) -> Self {
        Self {
            tile_url_template: template.into(),
            ..Self::default()
        }
    }
}

/// Simplify a track's (longitude, latitude) path for preview rendering.
///
/// Tracks of one or two points come back unchanged.
pub fn simplify_track(track: &Track) -> SimplifiedPath {
    let line: LineString<f64> = track
        .points()
        .iter()
        .map(|p| Coord {
            x: p.longitude,
            y: p.latitude,
        })
        .collect();

    if line.0.len() <= 2 {
        return SimplifiedPath::new(line);
    }

    let simplified = line.simplify(SIMPLIFY_TOLERANCE_DEGREES);
    tracing::debug!(
        original = line.0.len(),
        simplified = simplified.0.len(),
        "Simplified track path"
    );
    SimplifiedPath::new(simplified)
}

/// Encode a simplified path as a precision-5 polyline.
pub fn encode_path(path: &SimplifiedPath) -> Result<String, PreviewError> {
    polyline::encode_coordinates(path.line().coords().copied(), POLYLINE_PRECISION)
        .map_err(|e| PreviewError::PolylineError(e.to_string()))
}

/// Build the render request for a simplified path.
pub fn build_map_preview(
    path: &SimplifiedPath,
    settings: &PreviewSettings,
) -> Result<MapPreview, PreviewError> {
    Ok(MapPreview {
        width: settings.width,
        height: settings.height,
        padding_x: settings.padding_x,
        padding_y: settings.padding_y,
        tile_url_template: settings.tile_url_template.clone(),
        line: LineOverlay {
            color: settings.line_color.clone(),
            width: settings.line_width,
            coordinates: path.coordinates(),
            polyline: encode_path(path)?,
        },
    })
}

/// Errors from preview operations.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("Failed to encode polyline: {0}")]
    PolylineError(String),
}
