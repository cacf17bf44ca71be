//! Human-readable day summaries for hover and inspection.
//!
//! Summaries always reflect the bucket's data, never the current filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::bucket::DayBucket;
use crate::models::change_event::Category;
use crate::utils::date::format_day_label;

pub const NO_ACTIVITY: &str = "No activity";
pub const NO_MESSAGE: &str = "No message";
const BULLET: &str = "  • ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub date: NaiveDate,
    /// e.g. "Wed, Jan 10"
    pub date_label: String,
    pub lines: Vec<String>,
    pub total_events: usize,
}

impl Summary {
    /// The body lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Full hover text: date label, a blank line, then the body.
    pub fn tooltip(&self) -> String {
        let mut parts = Vec::with_capacity(self.lines.len() + 2);
        parts.push(self.date_label.as_str());
        parts.push("");
        parts.extend(self.lines.iter().map(String::as_str));
        parts.join("\n")
    }

    pub fn has_activity(&self) -> bool {
        self.total_events > 0
    }
}

/// Describe a bucket's events, grouped Added, Changed, Deleted.
pub fn describe(bucket: &DayBucket) -> Summary {
    let mut lines = Vec::new();

    for category in Category::ALL {
        let events = bucket.events(category);
        if events.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{} ({}):", category.heading(), events.len()));
        lines.extend(events.iter().map(|event| {
            format!("{}{}", BULLET, event.display_message().unwrap_or(NO_MESSAGE))
        }));
    }

    if lines.is_empty() {
        lines.push(NO_ACTIVITY.to_string());
    }

    Summary {
        date: bucket.date,
        date_label: format_day_label(bucket.date),
        lines,
        total_events: bucket.total(),
    }
}
