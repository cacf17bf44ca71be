//! The assembled render description.
//!
//! `build_heatmap` is the one entry point a host calls whenever events,
//! window or filters change. Nothing is cached between calls; the host
//! decides when to recompute. A filter-only change can go through
//! [`HeatmapView::with_filters`], which re-encodes cells and keeps buckets.

use chrono::{Local, NaiveDate, TimeZone};
use serde::Serialize;

use super::bucketizer::{bucketize_reported, BucketStats, Bucketization};
use super::encoder::{encode, CellVisual};
use super::grid::{layout, GridConfig, GridExtents, Rect};
use super::labels::{plan_labels, LabelPlan};
use super::palette::RgbaColor;
use super::period::PeriodReporter;
use super::tooltip::{describe, Summary};
use crate::models::bucket::{DayBucket, Period};
use crate::models::change_event::ChangeEvent;
use crate::models::filters::CategoryFilters;
use crate::models::window::Window;

/// Inputs for one recomputation.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapRequest<'a> {
    pub events: &'a [ChangeEvent],
    pub window: Window,
    pub filters: CategoryFilters,
    /// The last day shown; passed in so results are reproducible
    pub today: NaiveDate,
}

/// A cell placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedCell {
    pub date: NaiveDate,
    pub week_index: u32,
    pub day_of_week: u32,
    /// Pixel rectangle of the whole cell
    pub rect: Rect,
    pub visual: CellVisual,
}

impl PositionedCell {
    /// Segment rectangles in pixels with their fill colours, in paint order.
    pub fn pixel_segments(&self) -> Vec<(Rect, RgbaColor)> {
        self.visual
            .segments
            .iter()
            .map(|segment| (self.rect.scale_unit(segment.rect), segment.fill))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapView {
    pub window: Window,
    pub filters: CategoryFilters,
    pub period: Period,
    pub extents: GridExtents,
    /// Ordered by date, one per day of `period`
    pub buckets: Vec<DayBucket>,
    /// Parallel to `buckets`
    pub cells: Vec<PositionedCell>,
    pub labels: LabelPlan,
    pub stats: BucketStats,
}

/// Run the whole pipeline, resolving event days in the local time zone.
pub fn build_heatmap(
    request: &HeatmapRequest<'_>,
    config: &GridConfig,
    reporter: &mut PeriodReporter,
) -> HeatmapView {
    build_heatmap_in(request, config, reporter, &Local)
}

/// Run the whole pipeline, resolving event days in `tz`.
pub fn build_heatmap_in<Tz: TimeZone>(
    request: &HeatmapRequest<'_>,
    config: &GridConfig,
    reporter: &mut PeriodReporter,
    tz: &Tz,
) -> HeatmapView {
    let Bucketization {
        buckets,
        period,
        stats,
    } = bucketize_reported(request.events, request.window, request.today, tz, reporter);

    let extents = layout(&buckets, config);
    let cells = encode_cells(&buckets, &extents, &request.filters);
    let labels = plan_labels(&buckets);

    HeatmapView {
        window: request.window,
        filters: request.filters,
        period,
        extents,
        buckets,
        cells,
        labels,
        stats,
    }
}

/// Encode every bucket and place it on the grid.
pub fn encode_cells(
    buckets: &[DayBucket],
    extents: &GridExtents,
    filters: &CategoryFilters,
) -> Vec<PositionedCell> {
    buckets
        .iter()
        .map(|bucket| PositionedCell {
            date: bucket.date,
            week_index: bucket.week_index,
            day_of_week: bucket.day_of_week,
            rect: extents.cell_rect(bucket.week_index, bucket.day_of_week),
            visual: encode(bucket, filters),
        })
        .collect()
}

impl HeatmapView {
    pub fn bucket(&self, date: NaiveDate) -> Option<&DayBucket> {
        self.period
            .day_offset(date)
            .and_then(|offset| self.buckets.get(offset))
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&PositionedCell> {
        self.period
            .day_offset(date)
            .and_then(|offset| self.cells.get(offset))
    }

    /// Summary for `date`, or `None` when the date is outside the period.
    pub fn describe(&self, date: NaiveDate) -> Option<Summary> {
        self.bucket(date).map(describe)
    }

    /// Date of the cell under a pixel position.
    pub fn date_at(&self, x: f32, y: f32) -> Option<NaiveDate> {
        let (week, day) = self.extents.cell_at(x, y)?;
        let date = self.period.start + chrono::Duration::days(i64::from(week * 7 + day));
        self.period.contains(date).then_some(date)
    }

    /// Summary for the cell under a pixel position.
    pub fn describe_at(&self, x: f32, y: f32) -> Option<Summary> {
        self.date_at(x, y).and_then(|date| self.describe(date))
    }

    /// Re-encode cells for new filters; buckets and labels are kept.
    pub fn with_filters(mut self, filters: CategoryFilters) -> Self {
        self.cells = encode_cells(&self.buckets, &self.extents, &filters);
        self.filters = filters;
        self
    }
}
