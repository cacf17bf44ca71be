//! Grid extents and pixel geometry for the day-by-week layout.

use serde::{Deserialize, Serialize};

use crate::models::bucket::DayBucket;

/// Rows in the grid, one per weekday (Sunday first).
pub const GRID_ROWS: u32 = 7;

pub const DEFAULT_CELL_SIZE: f32 = 16.0;
pub const DEFAULT_CELL_PADDING: f32 = 2.0;
/// Gutter reserved left of the grid for day labels
pub const DEFAULT_Y_AXIS_WIDTH: f32 = 40.0;
/// Gutter reserved above the grid for month labels
pub const DEFAULT_X_AXIS_HEIGHT: f32 = 30.0;

const CANVAS_RIGHT_MARGIN: f32 = 20.0;
const CANVAS_BOTTOM_MARGIN: f32 = 40.0;

/// Configurable cell and gutter sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_size: f32,
    pub cell_padding: f32,
    pub y_axis_width: f32,
    pub x_axis_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            cell_padding: DEFAULT_CELL_PADDING,
            y_axis_width: DEFAULT_Y_AXIS_WIDTH,
            x_axis_height: DEFAULT_X_AXIS_HEIGHT,
        }
    }
}

impl GridConfig {
    /// Check if the sizes are usable (finite, positive cell, non-negative gaps)
    pub fn is_plausible(&self) -> bool {
        self.cell_size.is_finite()
            && self.cell_size > 0.0
            && self.cell_padding.is_finite()
            && self.cell_padding >= 0.0
            && self.y_axis_width.is_finite()
            && self.y_axis_width >= 0.0
            && self.x_axis_height.is_finite()
            && self.x_axis_height >= 0.0
    }
}

/// Axis-aligned rectangle. Used both in pixels and in unit-cell space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are excluded.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Map a unit-space rectangle into this rectangle.
    pub fn scale_unit(&self, unit: Rect) -> Rect {
        Rect::new(
            self.x + unit.x * self.width,
            self.y + unit.y * self.height,
            unit.width * self.width,
            unit.height * self.height,
        )
    }
}

/// Overall grid dimensions plus the sizes needed to place cells and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridExtents {
    /// Columns (weeks)
    pub width: u32,
    /// Rows (weekdays), always 7
    pub height: u32,
    pub cell_size: f32,
    pub cell_padding: f32,
    pub y_axis_width: f32,
    pub x_axis_height: f32,
}

impl GridExtents {
    /// Distance between the origins of neighbouring cells.
    pub fn stride(&self) -> f32 {
        self.cell_size + self.cell_padding
    }

    pub fn grid_pixel_width(&self) -> f32 {
        self.width as f32 * self.stride()
    }

    pub fn grid_pixel_height(&self) -> f32 {
        self.height as f32 * self.stride()
    }

    /// Total drawing surface including label gutters and margins.
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.grid_pixel_width() + self.y_axis_width + CANVAS_RIGHT_MARGIN,
            self.grid_pixel_height() + self.x_axis_height + CANVAS_BOTTOM_MARGIN,
        )
    }

    /// Pixel rectangle of the cell at (`week_index`, `day_of_week`).
    pub fn cell_rect(&self, week_index: u32, day_of_week: u32) -> Rect {
        Rect::new(
            self.y_axis_width + week_index as f32 * self.stride(),
            self.x_axis_height + day_of_week as f32 * self.stride(),
            self.cell_size,
            self.cell_size,
        )
    }

    /// Hit-test a pixel position, returning (`week_index`, `day_of_week`).
    ///
    /// Positions in the padding between cells or outside the grid miss.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        let stride = self.stride();
        if stride <= 0.0 {
            return None;
        }
        let gx = x - self.y_axis_width;
        let gy = y - self.x_axis_height;
        if gx < 0.0 || gy < 0.0 {
            return None;
        }
        let week = (gx / stride).floor() as u32;
        let day = (gy / stride).floor() as u32;
        if week >= self.width || day >= self.height {
            return None;
        }
        self.cell_rect(week, day)
            .contains(x, y)
            .then_some((week, day))
    }
}

/// Compute grid extents for a bucket list.
///
/// An empty list still yields a single column.
pub fn layout(buckets: &[DayBucket], config: &GridConfig) -> GridExtents {
    let width = buckets
        .iter()
        .map(|bucket| bucket.week_index)
        .max()
        .map_or(1, |max_week| max_week + 1);

    GridExtents {
        width,
        height: GRID_ROWS,
        cell_size: config.cell_size,
        cell_padding: config.cell_padding,
        y_axis_width: config.y_axis_width,
        x_axis_height: config.x_axis_height,
    }
}
