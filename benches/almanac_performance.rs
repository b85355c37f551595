use astro_almanac::{moon_phase, moon_position, sun_position, sun_times, zodiac_sign};
use chrono::{DateTime, Duration, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn benchmark_single_calculation(c: &mut Criterion) {
    let datetime = "2024-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 52.09;
    let lon = 5.12;

    c.bench_function("sun_position_single", |b| {
        b.iter(|| sun_position(black_box(datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("moon_position_single", |b| {
        b.iter(|| moon_position(black_box(datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("sun_times_single", |b| {
        b.iter(|| sun_times(black_box(datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("moon_phase_single", |b| {
        b.iter(|| moon_phase(black_box(datetime)))
    });

    c.bench_function("zodiac_sign_single", |b| {
        b.iter(|| zodiac_sign(black_box(datetime)))
    });
}

fn benchmark_time_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");

    let base_datetime = "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 52.09;
    let lon = 5.12;

    for &count in &[1000, 5000, 25000] {
        group.throughput(Throughput::Elements(count));

        let datetimes: Vec<DateTime<Utc>> = (0..count)
            .map(|i| base_datetime + Duration::hours(i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::new("sun_position", count), &count, |b, _| {
            b.iter(|| {
                for &dt in &datetimes {
                    let _result =
                        sun_position(black_box(dt), black_box(lat), black_box(lon)).unwrap();
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("moon_position", count), &count, |b, _| {
            b.iter(|| {
                for &dt in &datetimes {
                    let _result =
                        moon_position(black_box(dt), black_box(lat), black_box(lon)).unwrap();
                }
            })
        });
    }

    group.finish();
}

fn benchmark_daily_almanac(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_almanac");

    let base_datetime = "2024-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 52.09;
    let lon = 5.12;

    for &days in &[365, 3650] {
        group.throughput(Throughput::Elements(days));

        let dates: Vec<DateTime<Utc>> = (0..days)
            .map(|i| base_datetime + Duration::days(i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::new("full_day", days), &days, |b, _| {
            b.iter(|| {
                for &date in &dates {
                    let _times =
                        sun_times(black_box(date), black_box(lat), black_box(lon)).unwrap();
                    let _phase = moon_phase(black_box(date));
                    let _sign = zodiac_sign(black_box(date));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series_fixed_location,
    benchmark_daily_almanac
);

criterion_main!(benches);
