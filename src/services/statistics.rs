// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip statistics derived from a validated track.
//!
//! Distance is the WGS84 geodesic length, summed segment by segment in
//! track order. Elevation deltas only count where both ends of a segment
//! have an elevation. Negative elevations are used as recorded.

use crate::models::{Track, TripStatistics};
use crate::services::track_parser::TrackError;
use geo::{Distance, Geodesic, Point};

/// Compute summary statistics for a track.
pub fn compute_statistics(track: &Track) -> Result<TripStatistics, TrackError> {
    let (first, last) = match (track.first(), track.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(TrackError::EmptyTrack),
    };

    let mut distance_meters = 0.0;
    let mut ascent_meters = 0.0;
    let mut descent_meters = 0.0;

    for (from, to) in track.segments() {
        distance_meters += Geodesic.distance(
            Point::new(from.longitude, from.latitude),
            Point::new(to.longitude, to.latitude),
        );

        if let (Some(from_ele), Some(to_ele)) = (from.elevation, to.elevation) {
            let delta = to_ele - from_ele;
            if delta > 0.0 {
                ascent_meters += delta;
            } else {
                descent_meters += delta.abs();
            }
        }
    }

    Ok(TripStatistics {
        start_time: first.timestamp,
        elapsed_seconds: (last.timestamp - first.timestamp).num_seconds(),
        distance_meters,
        ascent_meters,
        descent_meters,
    })
}
