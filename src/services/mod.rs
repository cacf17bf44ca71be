// Service module exports

pub mod config;
pub mod event_source;
pub mod heatmap;
