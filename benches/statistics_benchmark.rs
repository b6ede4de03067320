use chrono::{DateTime, Duration};
use criterion::{criterion_group, criterion_main, Criterion};
use outsidely::models::{Track, TrackPoint};
use outsidely::services::{compute_statistics, simplify_track};
use std::hint::black_box;

/// A wiggly ride of one point per second, roughly three hours long.
fn synthetic_track(points: usize) -> Track {
    let start = DateTime::from_timestamp(1_704_103_200, 0).expect("valid start time");
    Track::new(
        (0..points)
            .map(|i| {
                let step = i as f64;
                TrackPoint {
                    timestamp: start + Duration::seconds(i as i64),
                    longitude: -122.2 + step * 0.00005 + (step / 40.0).sin() * 0.0003,
                    latitude: 37.4 + step * 0.00003 + (step / 25.0).cos() * 0.0002,
                    elevation: Some(100.0 + (step / 300.0).sin() * 80.0),
                }
            })
            .collect(),
    )
}

fn benchmark_track_processing(c: &mut Criterion) {
    let track = synthetic_track(10_000);

    let mut group = c.benchmark_group("track_processing");

    group.bench_function("compute_statistics", |b| {
        b.iter(|| compute_statistics(black_box(&track)))
    });

    group.bench_function("simplify_track", |b| {
        b.iter(|| simplify_track(black_box(&track)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_track_processing);
criterion_main!(benches);
