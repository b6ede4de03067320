// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Track model: validated, time-ordered GPS fixes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sampled GPS fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub timestamp: DateTime<Utc>,
    /// Degrees, WGS84
    pub longitude: f64,
    /// Degrees, WGS84
    pub latitude: f64,
    /// Meters. `None` when the source has no elevation for this fix,
    /// which is not the same thing as 0 m.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

/// Ordered sequence of track points for one uploaded activity.
///
/// Immutable once built. Tracks produced by the parser have non-decreasing
/// timestamps; tracks built with [`Track::new`] are trusted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Track {
    points: Vec<TrackPoint>,
}

impl Track {
    /// Wrap an externally validated point sequence.
    pub fn new(points: Vec<TrackPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TrackPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrackPoint> {
        self.points.last()
    }

    /// Consecutive point pairs, in track order.
    pub fn segments(&self) -> impl Iterator<Item = (&TrackPoint, &TrackPoint)> {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}
