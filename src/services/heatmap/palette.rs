//! Fixed colour table for heatmap cells and labels.
//!
//! Colours are design constants, not derived from data.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::models::change_event::Category;

/// 8-bit RGBA colour; serialized as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for RgbaColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const ADD_COLOR: RgbaColor = RgbaColor::rgb(0x36, 0xa2, 0x88);
pub const CHANGE_COLOR: RgbaColor = RgbaColor::rgb(0xea, 0xb3, 0x08);
pub const DELETE_COLOR: RgbaColor = RgbaColor::rgb(0xef, 0x44, 0x44);
pub const INACTIVE_COLOR: RgbaColor = RgbaColor::rgb(0xe5, 0xe7, 0xeb);

pub const CELL_STROKE_COLOR: RgbaColor = INACTIVE_COLOR;
pub const CELL_STROKE_WIDTH: f32 = 0.5;
pub const CELL_CORNER_RADIUS: f32 = 2.0;
pub const HOVER_STROKE_COLOR: RgbaColor = RgbaColor::rgb(0, 0, 0);
pub const HOVER_STROKE_WIDTH: f32 = 1.5;

pub const LABEL_COLOR: RgbaColor = RgbaColor::rgb(0x66, 0x66, 0x66);
pub const LABEL_FONT_SIZE: f32 = 11.0;

/// Fill colour for a category.
pub fn color_for(category: Category) -> RgbaColor {
    match category {
        Category::Add => ADD_COLOR,
        Category::Change => CHANGE_COLOR,
        Category::Delete => DELETE_COLOR,
    }
}

/// Outline drawn around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: RgbaColor,
    pub width: f32,
}

impl Stroke {
    pub const CELL: Stroke = Stroke {
        color: CELL_STROKE_COLOR,
        width: CELL_STROKE_WIDTH,
    };

    pub const HOVER: Stroke = Stroke {
        color: HOVER_STROKE_COLOR,
        width: HOVER_STROKE_WIDTH,
    };
}
