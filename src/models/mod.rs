// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod preview;
pub mod stats;
pub mod track;

pub use activity::{ActivityRecord, UploadFormat};
pub use preview::{LineOverlay, MapPreview};
pub use stats::TripStatistics;
pub use track::{Track, TrackPoint};
