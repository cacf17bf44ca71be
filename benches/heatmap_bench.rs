// Benchmark for the heatmap pipeline
// Measures bucketization and the full render description over growing event logs

use change_heatmap::models::{Category, CategoryFilters, ChangeEvent, Window};
use change_heatmap::services::heatmap::{
    bucketize_in, build_heatmap_in, GridConfig, HeatmapRequest, PeriodReporter,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const KINDS: [&str; 3] = ["add", "change", "delete"];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Events spread evenly over the last year, cycling through categories.
fn sample_events(count: usize) -> Vec<ChangeEvent> {
    let end = Utc.from_utc_datetime(&today().and_hms_opt(23, 0, 0).unwrap());
    (0..count)
        .map(|i| {
            let at = end - Duration::minutes((i as i64 * 525_600) / count.max(1) as i64);
            ChangeEvent::at(at, Category::ALL[i % 3])
                .with_message(format!("{} #{}", KINDS[i % 3], i))
        })
        .collect()
}

fn bench_bucketize(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucketize");

    for count in [100, 1_000, 10_000].iter() {
        let events = sample_events(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| {
                bucketize_in(
                    black_box(events),
                    black_box(Window::TwelveMonths),
                    black_box(today()),
                    &Utc,
                )
            });
        });
    }

    group.finish();
}

fn bench_build_heatmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_heatmap");
    let events = sample_events(5_000);

    for window in Window::ALL.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(window), window, |b, &window| {
            b.iter(|| {
                let request = HeatmapRequest {
                    events: black_box(&events),
                    window,
                    filters: CategoryFilters::all(),
                    today: today(),
                };
                build_heatmap_in(&request, &GridConfig::default(), &mut PeriodReporter::new(), &Utc)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bucketize, bench_build_heatmap);
criterion_main!(benches);
