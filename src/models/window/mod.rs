//! Trailing time windows supported by the heatmap.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::HeatmapError;

/// The trailing period, in months, that the grid covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Window {
    OneMonth,
    ThreeMonths,
    SixMonths,
    #[default]
    TwelveMonths,
}

impl Window {
    pub const ALL: [Window; 4] = [
        Window::OneMonth,
        Window::ThreeMonths,
        Window::SixMonths,
        Window::TwelveMonths,
    ];

    /// Number of calendar months covered.
    pub fn months(self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }
}

impl TryFrom<u32> for Window {
    type Error = HeatmapError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            1 => Ok(Self::OneMonth),
            3 => Ok(Self::ThreeMonths),
            6 => Ok(Self::SixMonths),
            12 => Ok(Self::TwelveMonths),
            other => Err(HeatmapError::UnsupportedWindow(other)),
        }
    }
}

impl From<Window> for u32 {
    fn from(window: Window) -> Self {
        window.months()
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.months() {
            1 => write!(f, "1 month"),
            n => write!(f, "{} months", n),
        }
    }
}
