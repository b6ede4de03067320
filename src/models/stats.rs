//! Trip statistics derived from a track.
//!
//! Computed once per upload and stored alongside the activity record. A
//! re-upload produces a new record; stored statistics are never patched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Summary statistics for one track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TripStatistics {
    /// Timestamp of the first point
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub start_time: DateTime<Utc>,
    /// Whole seconds between the first and last point
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub elapsed_seconds: i64,
    /// Sum of geodesic segment lengths (meters)
    pub distance_meters: f64,
    /// Accumulated elevation gain (meters)
    pub ascent_meters: f64,
    /// Accumulated elevation loss (meters, non-negative)
    pub descent_meters: f64,
}
