// src/core/mod.rs

pub mod dates;
pub mod numeric;

pub use numeric::PercentChange;
