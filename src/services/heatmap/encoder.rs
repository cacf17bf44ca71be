//! Per-day visual encoding.
//!
//! A cell shows the categories that have events on that day *and* are
//! visible under the current filters, always in Add, Change, Delete order.
//! Geometry is expressed in unit-cell space so any backend can scale it.

use serde::{Deserialize, Serialize};

use super::grid::Rect;
use super::palette::{color_for, RgbaColor, Stroke, CELL_CORNER_RADIUS, INACTIVE_COLOR};
use crate::models::bucket::DayBucket;
use crate::models::change_event::Category;
use crate::models::filters::CategoryFilters;

const FULL: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);
const TOP_HALF: Rect = Rect::new(0.0, 0.0, 1.0, 0.5);
const BOTTOM_HALF: Rect = Rect::new(0.0, 0.5, 1.0, 0.5);
const TOP_LEFT: Rect = Rect::new(0.0, 0.0, 0.5, 0.5);
const TOP_RIGHT: Rect = Rect::new(0.5, 0.0, 0.5, 0.5);

/// How the active categories are arranged inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellComposition {
    /// No visible activity
    Inactive,
    Solid { category: Category },
    /// Two equal bands, higher-priority category on top
    HorizontalSplit { top: Category, bottom: Category },
    /// Add top-left, Change top-right, Delete across the bottom half
    TriSplit,
}

/// One filled region of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellSegment {
    /// In unit-cell coordinates (0..=1 on both axes)
    pub rect: Rect,
    pub fill: RgbaColor,
    /// `None` for the inactive background
    pub category: Option<Category>,
}

/// Renderer-agnostic description of a single cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellVisual {
    pub composition: CellComposition,
    /// Drawn in order; later segments paint over earlier ones
    pub segments: Vec<CellSegment>,
    pub stroke: Stroke,
    pub corner_radius: f32,
}

impl CellVisual {
    fn new(composition: CellComposition, segments: Vec<CellSegment>) -> Self {
        Self {
            composition,
            segments,
            stroke: Stroke::CELL,
            corner_radius: CELL_CORNER_RADIUS,
        }
    }

    pub fn is_active(&self) -> bool {
        self.composition != CellComposition::Inactive
    }

    /// Categories shown by this cell, in priority order.
    pub fn categories(&self) -> Vec<Category> {
        match self.composition {
            CellComposition::Inactive => Vec::new(),
            CellComposition::Solid { category } => vec![category],
            CellComposition::HorizontalSplit { top, bottom } => vec![top, bottom],
            CellComposition::TriSplit => Category::ALL.to_vec(),
        }
    }

    /// Fill colour at a unit-cell coordinate; coordinates are clamped into the cell.
    pub fn color_at(&self, x: f32, y: f32) -> RgbaColor {
        let x = x.clamp(0.0, 1.0 - f32::EPSILON);
        let y = y.clamp(0.0, 1.0 - f32::EPSILON);
        self.segments
            .iter()
            .rev()
            .find(|segment| segment.rect.contains(x, y))
            .map_or(INACTIVE_COLOR, |segment| segment.fill)
    }
}

fn segment(rect: Rect, category: Category) -> CellSegment {
    CellSegment {
        rect,
        fill: color_for(category),
        category: Some(category),
    }
}

/// Categories that have events in `bucket` and pass `filters`, in priority order.
pub fn active_categories(bucket: &DayBucket, filters: &CategoryFilters) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|category| bucket.has(*category) && filters.is_visible(*category))
        .collect()
}

/// Encode one bucket under the given filters.
pub fn encode(bucket: &DayBucket, filters: &CategoryFilters) -> CellVisual {
    match active_categories(bucket, filters).as_slice() {
        [] => CellVisual::new(
            CellComposition::Inactive,
            vec![CellSegment {
                rect: FULL,
                fill: INACTIVE_COLOR,
                category: None,
            }],
        ),
        [only] => CellVisual::new(
            CellComposition::Solid { category: *only },
            vec![segment(FULL, *only)],
        ),
        [top, bottom] => CellVisual::new(
            CellComposition::HorizontalSplit {
                top: *top,
                bottom: *bottom,
            },
            vec![segment(TOP_HALF, *top), segment(BOTTOM_HALF, *bottom)],
        ),
        _ => CellVisual::new(
            CellComposition::TriSplit,
            vec![
                segment(TOP_LEFT, Category::Add),
                segment(TOP_RIGHT, Category::Change),
                segment(BOTTOM_HALF, Category::Delete),
            ],
        ),
    }
}
