//! Month and weekday axis labels.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::grid::GridExtents;
use super::palette::{RgbaColor, LABEL_COLOR, LABEL_FONT_SIZE};
use crate::models::bucket::DayBucket;
use crate::utils::date::short_month_name;

/// Weekday abbreviations, one per grid row.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Baseline of month labels, measured from the top of the canvas.
const MONTH_LABEL_BASELINE: f32 = 15.0;
/// Gap between day labels and the first grid column.
const DAY_LABEL_GAP: f32 = 10.0;
/// Lifts the day label baseline off the bottom of its row.
const DAY_LABEL_BASELINE_LIFT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Start,
    End,
}

/// Where and how a label should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextAnchor {
    pub x: f32,
    pub y: f32,
    pub align: TextAlign,
    pub font_size: f32,
    pub color: RgbaColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabel {
    /// Upper-case short month name, e.g. "JAN"
    pub text: String,
    pub week_index: u32,
    pub year: i32,
    pub month: u32,
}

impl MonthLabel {
    pub fn anchor(&self, extents: &GridExtents) -> TextAnchor {
        TextAnchor {
            x: extents.y_axis_width + self.week_index as f32 * extents.stride(),
            y: MONTH_LABEL_BASELINE,
            align: TextAlign::Start,
            font_size: LABEL_FONT_SIZE,
            color: LABEL_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLabel {
    pub text: String,
    pub row: u32,
}

impl DayLabel {
    pub fn anchor(&self, extents: &GridExtents) -> TextAnchor {
        TextAnchor {
            x: extents.y_axis_width - DAY_LABEL_GAP,
            y: extents.x_axis_height
                + self.row as f32 * extents.stride()
                + extents.cell_size
                - DAY_LABEL_BASELINE_LIFT,
            align: TextAlign::End,
            font_size: LABEL_FONT_SIZE,
            color: LABEL_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelPlan {
    pub month_labels: Vec<MonthLabel>,
    pub day_labels: Vec<DayLabel>,
}

/// The seven weekday labels, Sunday first.
pub fn day_labels() -> Vec<DayLabel> {
    DAY_LABELS
        .iter()
        .zip(0u32..)
        .map(|(text, row)| DayLabel {
            text: (*text).to_string(),
            row,
        })
        .collect()
}

/// Plan month and day labels for a bucket list.
///
/// Each distinct (year, month) gets exactly one label, anchored at the
/// middle bucket of that month's run (`count / 2`), so a month truncated by
/// the window start is labelled over the part that is actually shown.
pub fn plan_labels(buckets: &[DayBucket]) -> LabelPlan {
    let mut groups: BTreeMap<(i32, u32), Vec<&DayBucket>> = BTreeMap::new();
    for bucket in buckets {
        groups
            .entry((bucket.date.year(), bucket.date.month()))
            .or_default()
            .push(bucket);
    }

    let month_labels = groups
        .into_iter()
        .filter_map(|((year, month), cells)| {
            let anchor = cells.get(cells.len() / 2)?;
            Some(MonthLabel {
                text: short_month_name(anchor.date),
                week_index: anchor.week_index,
                year,
                month,
            })
        })
        .collect();

    LabelPlan {
        month_labels,
        day_labels: day_labels(),
    }
}
