// Date utility functions
// Calendar-day arithmetic used by the heatmap pipeline

use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, TimeZone};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Today's calendar date in the local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolve a raw event timestamp to the calendar day it falls on in `tz`.
///
/// Accepts RFC 3339 instants, naive date-times (taken as wall-clock time in
/// `tz`) and bare `YYYY-MM-DD` dates. Returns `None` for anything else.
pub fn parse_event_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(tz).date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// The Sunday on or before `date`.
pub fn week_start_sunday(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// `date` moved back by whole calendar months, clamping to the month's last day.
///
/// Mar 31 minus one month is Feb 29 (or 28) rather than a rolled-over date in
/// early March, so a window never covers less than its full month count.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Short tooltip label, e.g. "Wed, Jan 10".
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Upper-case short month name, e.g. "JAN".
pub fn short_month_name(date: NaiveDate) -> String {
    date.format("%b").to_string().to_uppercase()
}
