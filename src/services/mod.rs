// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod gpx_convert;
pub mod preview;
pub mod statistics;
pub mod track_parser;

pub use activity::{ActivityProcessor, ProcessResult};
pub use gpx_convert::{gpx_to_features, ConvertError};
pub use preview::{build_map_preview, simplify_track, PreviewError, PreviewSettings};
pub use statistics::compute_statistics;
pub use track_parser::{parse_features, parse_geojson, TrackError};
