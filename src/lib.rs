// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[doc(hidden)]
pub use tracing as __tracing;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod data;
pub mod file;
pub mod geocode;
pub mod gui;
pub mod merge;
pub mod progress;
pub mod runner;
pub mod store;
pub mod stores;
pub mod traffic;
pub mod views;
