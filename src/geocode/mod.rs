// src/geocode/mod.rs
pub mod client;
pub mod queue;
pub mod split;
pub mod stage;

pub use client::{Coordinates, Geocoder, HttpGeocoder};
pub use queue::{Pacer, RateLimitedQueue, RecordingPacer, ThreadPacer};
pub use split::{parse_dump, AddressRow, SplitRule};
pub use stage::{geocode_rows, GeocodeSummary};
