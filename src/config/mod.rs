// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod state;

pub use options::{DashboardOptions, GeocodeOptions, MergeOptions, PipelineConfig};
