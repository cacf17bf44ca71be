//! Typed errors for the heatmap models.
//!
//! Malformed events are never errors; they are dropped during bucketization.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeatmapError {
    #[error("unsupported window of {0} months (expected 1, 3, 6 or 12)")]
    UnsupportedWindow(u32),
}
