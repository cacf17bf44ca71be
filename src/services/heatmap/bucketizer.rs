//! Builds the contiguous day range for a window and assigns events to days.

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::bucket::{DayBucket, Period};
use crate::models::change_event::ChangeEvent;
use crate::models::window::Window;
use crate::services::heatmap::period::PeriodReporter;
use crate::utils::date::{months_before, parse_event_date, week_start_sunday};

/// Output of one bucketization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucketization {
    /// One bucket per day of `period`, ordered by date
    pub buckets: Vec<DayBucket>,
    pub period: Period,
    pub stats: BucketStats,
}

impl Bucketization {
    /// Bucket for `date`, if it lies inside the period.
    pub fn bucket(&self, date: NaiveDate) -> Option<&DayBucket> {
        self.period
            .day_offset(date)
            .and_then(|offset| self.buckets.get(offset))
    }
}

/// How the input events were disposed of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStats {
    pub accepted: usize,
    pub out_of_range: usize,
    pub unparseable: usize,
    pub unrecognized: usize,
}

impl BucketStats {
    pub fn dropped(&self) -> usize {
        self.out_of_range + self.unparseable + self.unrecognized
    }
}

/// Resolve the rendered period for `window` ending on `today`.
///
/// The start is moved back to the Sunday on or before `today - window`, so the
/// first grid column always begins on a Sunday.
pub fn resolve_period(window: Window, today: NaiveDate) -> Period {
    let raw_start = months_before(today, window.months());
    Period::new(week_start_sunday(raw_start), today)
}

/// Bucketize `events` using the local time zone to resolve event days.
///
/// No period notification is sent; use [`bucketize_reported`] when a
/// listener must hear about the period.
pub fn bucketize(events: &[ChangeEvent], window: Window, today: NaiveDate) -> Bucketization {
    bucketize_in(events, window, today, &Local)
}

/// Bucketize `events`, resolving each timestamp to a calendar day in `tz`.
///
/// Events with unknown types, unparseable timestamps or dates outside the
/// period are skipped. Input order is preserved inside each category list.
/// Like [`bucketize`], this does not notify any listener.
pub fn bucketize_in<Tz: TimeZone>(
    events: &[ChangeEvent],
    window: Window,
    today: NaiveDate,
    tz: &Tz,
) -> Bucketization {
    let period = resolve_period(window, today);

    let mut buckets: Vec<DayBucket> = Vec::with_capacity(period.day_count());
    let mut day = period.start;
    while day <= period.end {
        buckets.push(DayBucket::empty(day, period.start));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    let mut stats = BucketStats::default();
    for event in events {
        let Some(category) = event.category() else {
            log::trace!("Skipping event with unrecognized type '{}'", event.kind);
            stats.unrecognized += 1;
            continue;
        };
        let Some(date) = parse_event_date(&event.timestamp, tz) else {
            log::trace!("Skipping event with unparseable timestamp '{}'", event.timestamp);
            stats.unparseable += 1;
            continue;
        };
        let Some(bucket) = period
            .day_offset(date)
            .and_then(|offset| buckets.get_mut(offset))
        else {
            stats.out_of_range += 1;
            continue;
        };
        bucket.push(category, event.clone());
        stats.accepted += 1;
    }

    log::debug!(
        "Bucketized {} events for {} ({} to {}): {} accepted, {} dropped",
        events.len(),
        window,
        period.start,
        period.end,
        stats.accepted,
        stats.dropped()
    );

    Bucketization {
        buckets,
        period,
        stats,
    }
}

/// Bucketize in `tz` and report the resolved period to `reporter` exactly once.
pub fn bucketize_reported<Tz: TimeZone>(
    events: &[ChangeEvent],
    window: Window,
    today: NaiveDate,
    tz: &Tz,
    reporter: &mut PeriodReporter,
) -> Bucketization {
    let result = bucketize_in(events, window, today, tz);
    reporter.report(result.period);
    result
}
