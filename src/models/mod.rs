// Module exports for models

pub mod bucket;
pub mod change_event;
pub mod error;
pub mod filters;
pub mod window;

pub use bucket::{DayBucket, Period};
pub use change_event::{Category, ChangeEvent};
pub use error::HeatmapError;
pub use filters::CategoryFilters;
pub use window::Window;
