//! Storage layer.
//!
//! Activity rows and artifact blobs sit behind [`ActivityStore`] so the
//! processing code never builds its own connection. [`MemoryStore`] backs
//! the server and the tests.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::ActivityRecord;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Artifact names stored per activity.
pub mod artifacts {
    /// GeoJSON feature collection the track was parsed from
    pub const GEOJSON: &str = "geojson.json";
    /// Parsed track points
    pub const ACTIVITY_DATA: &str = "activityData.json";
    /// Map render request
    pub const PREVIEW: &str = "preview.json";

    /// Blob key: `{activity_id}/{name}`.
    pub fn key(activity_id: uuid::Uuid, name: &str) -> String {
        format!("{}/{}", activity_id, name)
    }
}

/// Save/load capability for uploaded activities.
pub trait ActivityStore: Send + Sync {
    /// Create or replace an activity record.
    fn upsert_activity(&self, record: &ActivityRecord) -> Result<(), AppError>;

    /// Get one of a user's activities.
    fn get_activity(
        &self,
        user_id: &str,
        activity_id: Uuid,
    ) -> Result<Option<ActivityRecord>, AppError>;

    /// All activities created at or after `since`, newest first.
    fn list_activities_since(&self, since: DateTime<Utc>)
        -> Result<Vec<ActivityRecord>, AppError>;

    /// Store a blob under `key`, replacing any previous value.
    fn put_artifact(&self, key: &str, data: Vec<u8>) -> Result<(), AppError>;

    fn get_artifact(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;
}
