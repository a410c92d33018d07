// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::{consts::DEFAULT_TRAFFIC_FILE, options::{GeocodeOptions, MergeOptions, PipelineConfig}},
    error::Result,
    file::resolve_single_out_path,
    geocode::{self, Geocoder, HttpGeocoder, Pacer, RateLimitedQueue},
    merge,
    progress::Progress,
    store,
};

pub use crate::geocode::GeocodeSummary;

/// Summary of what the merge produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Both stages, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub merge: MergeSummary,
    pub geocode: GeocodeSummary,
}

/* ---------------- Merge ---------------- */

pub fn run_merge(
    opts: &MergeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<MergeSummary> {
    logf!("Merge: {} input(s), key '{}'", opts.inputs.len(), opts.join_key);
    let merged = merge::merge_inputs(opts, progress)?;

    let path = resolve_single_out_path(&opts.output, DEFAULT_TRAFFIC_FILE)?;
    store::save_dataset(&path, &merged)?;

    Ok(MergeSummary {
        path,
        rows: merged.row_count(),
        columns: merged.header_count(),
    })
}

/* ---------------- Geocode ---------------- */

/// Geocode with the real HTTP client and wall-clock pauses.
pub fn run_geocode(
    opts: &GeocodeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<GeocodeSummary> {
    let client = HttpGeocoder::from_options(opts)?;
    let mut queue = RateLimitedQueue::new(opts.delay());
    geocode::stage::run(opts, &client, &mut queue, progress)
}

/// Same stage with a caller-provided geocoder and pacer.
pub fn run_geocode_with<P: Pacer>(
    opts: &GeocodeOptions,
    geocoder: &dyn Geocoder,
    pacer: P,
    progress: Option<&mut dyn Progress>,
) -> Result<GeocodeSummary> {
    let mut queue = RateLimitedQueue::with_pacer(opts.delay(), pacer);
    geocode::stage::run(opts, geocoder, &mut queue, progress)
}

/* ---------------- Whole pipeline ---------------- */

pub fn run_all(
    cfg: &PipelineConfig,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let merge = run_merge(&cfg.merge, progress.as_mut().map(|p| &mut **p as &mut dyn Progress))?;
    let geocode = run_geocode(&cfg.geocode, progress)?;
    Ok(RunSummary { merge, geocode })
}

/// Both stages with a caller-provided geocoder and pacer.
pub fn run_all_with<P: Pacer>(
    cfg: &PipelineConfig,
    geocoder: &dyn Geocoder,
    pacer: P,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let merge = run_merge(&cfg.merge, progress.as_mut().map(|p| &mut **p as &mut dyn Progress))?;
    let geocode = run_geocode_with(&cfg.geocode, geocoder, pacer, progress)?;
    Ok(RunSummary { merge, geocode })
}
