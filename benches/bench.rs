// Criterion benchmarks for SportMap

use chrono::{NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sportmap::core::{distance::haversine_distance, filter_events, find_nearby};
use sportmap::models::{Coordinate, Event, FilterCriteria, UserPresence};

const SPORTS: &[&str] = &["бег", "велоспорт", "лыжи", "йога", "плавание"];

fn create_event(id: usize, lat: f64, lng: f64) -> Event {
    Event {
        id: id as u64,
        title: format!("Event {}", id),
        description: String::new(),
        sport: SPORTS[id % SPORTS.len()].to_string(),
        date: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
        location: String::new(),
        coordinate: Coordinate { latitude: lat, longitude: lng },
    }
}

fn create_events(count: usize) -> Vec<Event> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.001) % 0.5;
            let lng_offset = (i as f64 * 0.0013) % 0.5;
            create_event(i, 55.5 + lat_offset, 37.4 + lng_offset)
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(55.7558),
                black_box(37.6173),
                black_box(55.7539),
                black_box(37.6208),
            )
        });
    });
}

fn bench_filter_events(c: &mut Criterion) {
    let criteria = FilterCriteria {
        sport: Some("бег".to_string()),
        radius_km: 10.0,
        origin: Some(Coordinate { latitude: 55.7558, longitude: 37.6173 }),
    };

    let mut group = c.benchmark_group("filter_events");

    for event_count in [10, 100, 1000, 10_000].iter() {
        let events = create_events(*event_count);

        group.bench_with_input(
            BenchmarkId::new("sport_and_radius", event_count),
            event_count,
            |b, _| {
                b.iter(|| filter_events(black_box(&events), black_box(&criteria)).len());
            },
        );
    }

    group.finish();
}

fn bench_find_nearby(c: &mut Criterion) {
    let now = Utc::now();
    let presences: Vec<UserPresence> = (0..1000)
        .map(|i| UserPresence {
            user_id: i,
            username: None,
            coordinate: Coordinate {
                latitude: 55.5 + (i as f64 * 0.0007) % 0.5,
                longitude: 37.4 + (i as f64 * 0.0011) % 0.5,
            },
            comment: None,
            sports: vec![],
            last_seen: now,
            is_visible: i % 5 != 0,
        })
        .collect();
    let origin = Coordinate { latitude: 55.7558, longitude: 37.6173 };

    c.bench_function("find_nearby_1000_presences", |b| {
        b.iter(|| {
            find_nearby(
                black_box(&presences),
                black_box(&origin),
                black_box(10.0),
                now,
                chrono::Duration::hours(2),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_filter_events,
    bench_find_nearby
);

criterion_main!(benches);
