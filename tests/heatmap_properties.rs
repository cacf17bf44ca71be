// Property-based tests for bucketization, layout and encoding
use change_heatmap::models::{Category, CategoryFilters, ChangeEvent, DayBucket, Window};
use change_heatmap::services::heatmap::{
    bucketize_in, build_heatmap_in, encode, CellComposition, GridConfig, HeatmapRequest,
    PeriodReporter, Rect,
};
use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use proptest::prelude::*;

fn arb_window() -> impl Strategy<Value = Window> {
    prop::sample::select(Window::ALL.to_vec())
}

fn arb_today() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 .. roughly 2040
    (0i64..14_600).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn arb_kind() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["add", "change", "delete", "rename", "Add"])
}

/// Events spread from ~14 months before `today` to a few days after it.
fn arb_events(today: NaiveDate) -> impl Strategy<Value = Vec<ChangeEvent>> {
    prop::collection::vec((-430i64..5, 0u32..86_400, arb_kind()), 0..60).prop_map(
        move |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (day, secs, kind))| {
                    let date = today + Duration::days(day);
                    let at = Utc
                        .from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
                        + Duration::seconds(i64::from(secs));
                    ChangeEvent::new(at.to_rfc3339(), kind).with_message(format!("event {}", i))
                })
                .collect()
        },
    )
}

fn arb_scenario() -> impl Strategy<Value = (Window, NaiveDate, Vec<ChangeEvent>)> {
    (arb_window(), arb_today())
        .prop_flat_map(|(window, today)| (Just(window), Just(today), arb_events(today)))
}

fn arb_filters() -> impl Strategy<Value = CategoryFilters> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(add, change, delete)| {
        CategoryFilters {
            add,
            change,
            delete,
        }
    })
}

/// 1..=5 events of one category on Jan 10, 2024, in generation order.
fn arb_day_events(kind: &'static str) -> impl Strategy<Value = Vec<ChangeEvent>> {
    prop::collection::vec((0u32..1_440, "[a-z]{0,8}"), 1..=5).prop_map(move |specs| {
        specs
            .into_iter()
            .map(|(minute, message)| {
                let timestamp = format!("2024-01-10T{:02}:{:02}:00Z", minute / 60, minute % 60);
                ChangeEvent::new(timestamp, kind).with_message(message)
            })
            .collect()
    })
}

fn day_bucket(
    add: Vec<ChangeEvent>,
    change: Vec<ChangeEvent>,
    delete: Vec<ChangeEvent>,
) -> DayBucket {
    let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
    let mut bucket = DayBucket::empty(date, start);
    bucket.add_events = add;
    bucket.change_events = change;
    bucket.delete_events = delete;
    bucket
}

/// A bucket holding all three categories, plus the same bucket with every
/// category list shuffled.
fn arb_shuffled_bucket() -> impl Strategy<Value = (DayBucket, DayBucket)> {
    (arb_day_events("add"), arb_day_events("change"), arb_day_events("delete")).prop_flat_map(
        |(add, change, delete)| {
            let original = day_bucket(add.clone(), change.clone(), delete.clone());
            (
                Just(original),
                Just(add).prop_shuffle(),
                Just(change).prop_shuffle(),
                Just(delete).prop_shuffle(),
            )
                .prop_map(|(original, add, change, delete)| {
                    (original, day_bucket(add, change, delete))
                })
        },
    )
}

fn every_filter_combination() -> Vec<CategoryFilters> {
    (0u8..8)
        .map(|bits| CategoryFilters {
            add: bits & 1 != 0,
            change: bits & 2 != 0,
            delete: bits & 4 != 0,
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_event_order_within_day_never_changes_encoding(
        (original, shuffled) in arb_shuffled_bucket(),
    ) {
        for filters in every_filter_combination() {
            prop_assert_eq!(encode(&shuffled, &filters), encode(&original, &filters));
        }
    }

    #[test]
    fn prop_three_categories_use_fixed_quadrants((_, shuffled) in arb_shuffled_bucket()) {
        let visual = encode(&shuffled, &CategoryFilters::all());
        prop_assert_eq!(visual.composition, CellComposition::TriSplit);

        let layout: Vec<(Rect, Option<Category>)> = visual
            .segments
            .iter()
            .map(|segment| (segment.rect, segment.category))
            .collect();
        prop_assert_eq!(
            layout,
            vec![
                (Rect::new(0.0, 0.0, 0.5, 0.5), Some(Category::Add)),
                (Rect::new(0.5, 0.0, 0.5, 0.5), Some(Category::Change)),
                (Rect::new(0.0, 0.5, 1.0, 0.5), Some(Category::Delete)),
            ]
        );
    }

    #[test]
    fn prop_buckets_are_contiguous_and_sunday_aligned((window, today, events) in arb_scenario()) {
        let result = bucketize_in(&events, window, today, &Utc);

        prop_assert_eq!(result.period.start.weekday(), Weekday::Sun);
        prop_assert_eq!(result.period.end, today);
        prop_assert_eq!(result.buckets.first().map(|b| b.date), Some(result.period.start));
        prop_assert_eq!(result.buckets.last().map(|b| b.date), Some(today));
        for pair in result.buckets.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        for bucket in &result.buckets {
            prop_assert_eq!(bucket.day_of_week, bucket.date.weekday().num_days_from_sunday());
            prop_assert_eq!(bucket.week_index, result.period.week_index(bucket.date));
        }
    }

    #[test]
    fn prop_span_matches_window((window, today, events) in arb_scenario()) {
        let result = bucketize_in(&events, window, today, &Utc);
        let span = (result.period.end - result.period.start).num_days();
        let (low, high) = match window {
            Window::OneMonth => (27, 37),
            Window::ThreeMonths => (88, 98),
            Window::SixMonths => (180, 190),
            Window::TwelveMonths => (364, 372),
        };
        prop_assert!(span >= low && span <= high, "span {} for {}", span, window);
    }

    #[test]
    fn prop_events_are_conserved((window, today, events) in arb_scenario()) {
        let result = bucketize_in(&events, window, today, &Utc);
        let bucketed: usize = result.buckets.iter().map(|b| b.total()).sum();

        prop_assert_eq!(bucketed, result.stats.accepted);
        prop_assert_eq!(result.stats.accepted + result.stats.dropped(), events.len());

        let expected = events
            .iter()
            .filter(|event| event.category().is_some())
            .filter(|event| {
                let date = chrono::DateTime::parse_from_rfc3339(&event.timestamp)
                    .unwrap()
                    .with_timezone(&Utc)
                    .date_naive();
                result.period.contains(date)
            })
            .count();
        prop_assert_eq!(bucketed, expected);
    }

    #[test]
    fn prop_input_order_does_not_change_counts((window, today, events) in arb_scenario()) {
        let forward = bucketize_in(&events, window, today, &Utc);
        let mut reversed_events = events.clone();
        reversed_events.reverse();
        let reversed = bucketize_in(&reversed_events, window, today, &Utc);

        prop_assert_eq!(forward.period, reversed.period);
        prop_assert_eq!(forward.stats, reversed.stats);
        for (a, b) in forward.buckets.iter().zip(&reversed.buckets) {
            prop_assert_eq!(a.presence(), b.presence());
            for category in Category::ALL {
                prop_assert_eq!(a.count(category), b.count(category));
            }
        }
    }

    #[test]
    fn prop_pipeline_is_idempotent(
        (window, today, events) in arb_scenario(),
        filters in arb_filters(),
    ) {
        let request = HeatmapRequest { events: &events, window, filters, today };
        let config = GridConfig::default();
        let first = build_heatmap_in(&request, &config, &mut PeriodReporter::new(), &Utc);
        let second = build_heatmap_in(&request, &config, &mut PeriodReporter::new(), &Utc);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_grid_shape_follows_period((window, today, events) in arb_scenario()) {
        let request = HeatmapRequest {
            events: &events,
            window,
            filters: CategoryFilters::all(),
            today,
        };
        let config = GridConfig::default();
        let view = build_heatmap_in(&request, &config, &mut PeriodReporter::new(), &Utc);

        prop_assert_eq!(view.extents.height, 7);
        prop_assert_eq!(view.extents.width, view.period.week_index(today) + 1);
        prop_assert_eq!(view.cells.len(), view.buckets.len());
        for cell in &view.cells {
            prop_assert!(cell.week_index < view.extents.width);
            prop_assert!(cell.day_of_week < 7);
        }
    }

    #[test]
    fn prop_encoding_reflects_visible_categories(
        (window, today, events) in arb_scenario(),
        filters in arb_filters(),
    ) {
        let result = bucketize_in(&events, window, today, &Utc);
        for bucket in &result.buckets {
            let visible: Vec<Category> = Category::ALL
                .into_iter()
                .filter(|category| filters.is_visible(*category) && bucket.has(*category))
                .collect();
            let visual = encode(bucket, &filters);

            prop_assert_eq!(visual.categories(), visible.clone());
            let expected_segments = if visible.is_empty() { 1 } else { visible.len() };
            prop_assert_eq!(visual.segments.len(), expected_segments);
            match visible.len() {
                0 => prop_assert_eq!(visual.composition, CellComposition::Inactive),
                1 => prop_assert_eq!(
                    visual.composition,
                    CellComposition::Solid { category: visible[0] }
                ),
                2 => prop_assert_eq!(
                    visual.composition,
                    CellComposition::HorizontalSplit { top: visible[0], bottom: visible[1] }
                ),
                _ => prop_assert_eq!(visual.composition, CellComposition::TriSplit),
            }
        }
    }
}
