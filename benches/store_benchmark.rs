use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waytrack::models::{Coordinates, Workout};
use waytrack::store::{MemorySlot, Persistence};

fn benchmark_slot_roundtrip(c: &mut Criterion) {
    let persistence = Persistence::new(Box::new(MemorySlot::new()));
    let now = Utc.with_ymd_and_hms(2024, 4, 14, 9, 30, 0).unwrap();

    // A season's worth of alternating workouts.
    let workouts: Vec<Workout> = (0..200)
        .map(|i| {
            let coords = Coordinates::new(40.0 + f64::from(i) * 0.001, -75.0);
            if i % 2 == 0 {
                Workout::running(coords, 5.0, 30.0, 170.0, now)
            } else {
                Workout::cycling(coords, 20.0, 60.0, 200.0, now)
            }
        })
        .collect();

    let mut group = c.benchmark_group("slot_roundtrip");

    group.bench_function("save_200", |b| {
        b.iter(|| persistence.save(black_box(&workouts)).unwrap())
    });

    persistence.save(&workouts).unwrap();
    group.bench_function("load_200", |b| {
        b.iter(|| persistence.load().unwrap())
    });

    group.finish();
}

criterion_group!(benches, benchmark_slot_roundtrip);
criterion_main!(benches);
