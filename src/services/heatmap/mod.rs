//! Calendar activity heatmap.
//!
//! Pipeline: events + window -> [`bucketizer`] -> [`grid`] -> [`encoder`] and
//! [`labels`] -> [`view::HeatmapView`]. [`tooltip`] answers inspection
//! queries against the same buckets and [`period`] notifies the host of the
//! resolved date range.

pub mod bucketizer;
pub mod encoder;
pub mod grid;
pub mod labels;
pub mod palette;
pub mod period;
pub mod tooltip;
pub mod view;

pub use bucketizer::{
    bucketize, bucketize_in, bucketize_reported, resolve_period, BucketStats, Bucketization,
};
pub use encoder::{active_categories, encode, CellComposition, CellSegment, CellVisual};
pub use grid::{layout, GridConfig, GridExtents, Rect};
pub use labels::{plan_labels, DayLabel, LabelPlan, MonthLabel, TextAlign, TextAnchor};
pub use palette::{color_for, RgbaColor, Stroke};
pub use period::PeriodReporter;
pub use tooltip::{describe, Summary};
pub use view::{build_heatmap, build_heatmap_in, HeatmapRequest, HeatmapView, PositionedCell};
