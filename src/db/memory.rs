// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity store.

use crate::db::ActivityStore;
use crate::error::AppError;
use crate::models::ActivityRecord;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// `DashMap`-backed store. Safe to share across request handlers.
#[derive(Default)]
pub struct MemoryStore {
    activities: DashMap<(String, Uuid), ActivityRecord>,
    artifacts: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored activity records.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Number of stored artifacts.
    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }
}

impl ActivityStore for MemoryStore {
    fn upsert_activity(&self, record: &ActivityRecord) -> Result<(), AppError> {
        self.activities
            .insert((record.user_id.clone(), record.activity_id), record.clone());
        Ok(())
    }

    fn get_activity(
        &self,
        user_id: &str,
        activity_id: Uuid,
    ) -> Result<Option<ActivityRecord>, AppError> {
        Ok(self
            .activities
            .get(&(user_id.to_string(), activity_id))
            .map(|entry| entry.value().clone()))
    }

    fn list_activities_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        let mut records: Vec<ActivityRecord> = self
            .activities
            .iter()
            .filter(|entry| entry.value().created_at >= since)
            .map(|entry| entry.value().clone())
            .collect();

        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.activity_id.cmp(&b.activity_id))
        });
        Ok(records)
    }

    fn put_artifact(&self, key: &str, data: Vec<u8>) -> Result<(), AppError> {
        self.artifacts.insert(key.to_string(), data);
        Ok(())
    }

    fn get_artifact(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.artifacts.get(key).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripStatistics;
    use chrono::Duration;

    fn record(user: &str, created_at: DateTime<Utc>) -> ActivityRecord {
        ActivityRecord {
            activity_id: Uuid::new_v4(),
            user_id: user.to_string(),
            statistics: TripStatistics {
                start_time: created_at,
                elapsed_seconds: 60,
                distance_meters: 100.0,
                ascent_meters: 1.0,
                descent_meters: 2.0,
            },
            point_count: 2,
            preview_polyline: String::new(),
            created_at,
        }
    }

    #[test]
    fn test_get_activity_scoped_to_user() {
        let store = MemoryStore::new();
        let rec = record("alice", Utc::now());
        store.upsert_activity(&rec).unwrap();

        assert_eq!(
            store.get_activity("alice", rec.activity_id).unwrap(),
            Some(rec.clone())
        );
        assert_eq!(store.get_activity("bob", rec.activity_id).unwrap(), None);
    }

    #[test]
    fn test_upsert_replaces() {
        let store = MemoryStore::new();
        let mut rec = record("alice", Utc::now());
        store.upsert_activity(&rec).unwrap();

        rec.point_count = 42;
        store.upsert_activity(&rec).unwrap();

        assert_eq!(store.activity_count(), 1);
        let stored = store.get_activity("alice", rec.activity_id).unwrap().unwrap();
        assert_eq!(stored.point_count, 42);
    }

    #[test]
    fn test_list_since_filters_and_sorts_newest_first() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let old = record("alice", now - Duration::days(8));
        let older = record("bob", now - Duration::days(2));
        let newest = record("alice", now - Duration::hours(1));
        for rec in [&old, &older, &newest] {
            store.upsert_activity(rec).unwrap();
        }

        let listed = store
            .list_activities_since(now - Duration::days(7))
            .unwrap();

        let ids: Vec<Uuid> = listed.iter().map(|r| r.activity_id).collect();
        assert_eq!(ids, vec![newest.activity_id, older.activity_id]);
    }

    #[test]
    fn test_artifacts_round_trip() {
        let store = MemoryStore::new();
        store.put_artifact("abc/preview.json", b"{}".to_vec()).unwrap();

        assert_eq!(
            store.get_artifact("abc/preview.json").unwrap(),
            Some(b"{}".to_vec())
        );
        assert_eq!(store.get_artifact("abc/missing").unwrap(), None);
    }
}
