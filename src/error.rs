// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Join key '{key}' missing from {}", .path.display())]
    MissingJoinKey { path: PathBuf, key: String },

    #[error("Join key value '{value}' appears more than once in {}", .path.display())]
    DuplicateKey { path: PathBuf, value: String },

    #[error("Column '{0}' appears more than once in the merged table")]
    DuplicateColumn(String),

    #[error("No traffic inputs configured")]
    NoInputs,

    #[error("Line {line}: expected {expected} comma-separated fields, found {found}")]
    MalformedRow { line: usize, expected: usize, found: usize },

    #[error("Unrecognized date '{0}'")]
    BadDate(String),

    #[error("Environment variable {0} is not set (geocoding API key)")]
    MissingApiKey(String),

    #[error("Geocoder returned status {0}")]
    GeocodeStatus(String),

    #[error("Malformed geocoder response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
