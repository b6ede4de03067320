// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Preview geometry and the static map render request built from it.

use geo::LineString;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Reduced-vertex (longitude, latitude) polyline for preview rendering.
///
/// Geometry only: no timestamps or elevation survive simplification.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifiedPath {
    line: LineString<f64>,
}

impl SimplifiedPath {
    pub fn new(line: LineString<f64>) -> Self {
        Self { line }
    }

    pub fn line(&self) -> &LineString<f64> {
        &self.line
    }

    pub fn len(&self) -> usize {
        self.line.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.0.is_empty()
    }

    /// `[longitude, latitude]` pairs in path order.
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.line.coords().map(|c| [c.x, c.y]).collect()
    }

    /// GeoJSON LineString geometry.
    pub fn to_geometry(&self) -> geojson::Geometry {
        geojson::Geometry::new(geojson::Value::from(&self.line))
    }
}

/// Line drawn over the basemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LineOverlay {
    pub color: String,
    pub width: u32,
    /// `[longitude, latitude]` pairs
    pub coordinates: Vec<[f64; 2]>,
    /// Same path as an encoded polyline (precision 5)
    pub polyline: String,
}

/// Render request for the external static map renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapPreview {
    pub width: u32,
    pub height: u32,
    pub padding_x: u32,
    pub padding_y: u32,
    /// Basemap tile URL with `{z}`, `{x}`, `{y}` placeholders
    pub tile_url_template: String,
    pub line: LineOverlay,
}
