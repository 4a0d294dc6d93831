use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use suntable::{DateRange, Location, UtcTimeOfDay, almanac, table, time};

const ZONES: &[chrono_tz::Tz] = &[
    chrono_tz::America::New_York,
    chrono_tz::America::Chicago,
    chrono_tz::America::Denver,
    chrono_tz::America::Los_Angeles,
];

fn sample_locations(count: usize) -> Vec<Location> {
    (0..count)
        .map(|i| {
            // Mid-latitude spread so every row resolves to a clock time.
            let latitude = 25.0 + (i as f64 * 3.7) % 24.0;
            let longitude = -125.0 + (i as f64 * 11.3) % 55.0;
            Location::with_zone(
                format!("Park {i}"),
                latitude,
                longitude,
                ZONES[i % ZONES.len()],
            )
            .unwrap()
        })
        .collect()
}

fn benchmark_single_day(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

    c.bench_function("solve_single_day", |b| {
        b.iter(|| {
            almanac::sun_events_utc(black_box(date), black_box(29.872), black_box(-81.276))
                .unwrap()
        })
    });

    let event = UtcTimeOfDay::from_hours(11.468670);
    c.bench_function("localize_single_event", |b| {
        b.iter(|| {
            time::localize_in(
                black_box(date),
                black_box(event),
                black_box(chrono_tz::America::New_York),
            )
        })
    });
}

fn benchmark_year_table_by_location_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("year_table_by_location_count");
    let range = DateRange::year(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    for &count in &[1usize, 4, 16] {
        group.throughput(Throughput::Elements((count * 365) as u64));
        let locations = sample_locations(count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| table::build(black_box(&locations), black_box(range)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_table_by_window_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_by_window_length");
    let locations = sample_locations(4);
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    for &days in &[7u32, 30, 365] {
        group.throughput(Throughput::Elements(
            u64::from(days) * locations.len() as u64,
        ));
        let range = DateRange::new(start, days);

        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, _| {
            b.iter(|| table::build(black_box(&locations), black_box(range)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_day,
    benchmark_year_table_by_location_count,
    benchmark_table_by_window_length
);

criterion_main!(benches);
