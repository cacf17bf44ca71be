//! Heatmap configuration: grid geometry and the default window.

mod service;

use serde::{Deserialize, Serialize};

use super::heatmap::grid::GridConfig;
use crate::models::window::Window;

pub use service::ConfigService;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub default_window: Window,
    pub grid: GridConfig,
}

impl HeatmapConfig {
    /// Replace implausible grid sizes with the defaults.
    pub fn sanitized(mut self) -> Self {
        if !self.grid.is_plausible() {
            log::warn!(
                "Grid configuration {:?} is not plausible, using defaults",
                self.grid
            );
            self.grid = GridConfig::default();
        }
        self
    }
}
