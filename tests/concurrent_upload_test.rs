// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use outsidely::db::{artifacts, ActivityStore};
use outsidely::models::UploadFormat;

mod common;

const NUM_CONCURRENT_UPLOADS: usize = 16;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_uploads_all_stored() {
    // Every upload gets its own id, so no record or artifact may be lost
    // or overwritten when many land at once.
    let (_, state, store) = common::create_test_app();

    let mut handles = vec![];
    for i in 0..NUM_CONCURRENT_UPLOADS {
        let processor = state.activity_processor.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let (format, body) = if i % 2 == 0 {
                (UploadFormat::GeoJson, common::MORNING_RIDE_GEOJSON)
            } else {
                (UploadFormat::Gpx, common::MORNING_RIDE_GPX)
            };
            processor.process_upload(&format!("rider_{}", i % 4), format, body.as_bytes())
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        let result = handle
            .await
            .expect("Task join failed")
            .expect("Upload processing failed");
        ids.push(result.activity_id);
    }

    assert_eq!(store.activity_count(), NUM_CONCURRENT_UPLOADS);
    assert_eq!(store.artifact_count(), NUM_CONCURRENT_UPLOADS * 4);

    let feed = store
        .list_activities_since(chrono::Utc::now() - chrono::Duration::days(1))
        .unwrap();
    assert_eq!(feed.len(), NUM_CONCURRENT_UPLOADS);

    let first = feed[0].statistics;
    assert!(
        feed.iter().all(|record| record.statistics == first),
        "Statistics differ between identical uploads"
    );

    for id in ids {
        assert!(store
            .get_artifact(&artifacts::key(id, artifacts::PREVIEW))
            .unwrap()
            .is_some());
    }
}
