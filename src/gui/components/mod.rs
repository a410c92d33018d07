// src/gui/components/mod.rs
pub mod data_table;
pub mod entity_panel;
pub mod metrics;
pub mod plot;
pub mod tabs;
