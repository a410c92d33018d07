// src/geocode/stage.rs
use std::path::PathBuf;

use super::client::{Coordinates, Geocoder};
use super::queue::{Pacer, RateLimitedQueue};
use super::split::{parse_dump, AddressRow, SplitRule};
use crate::config::options::GeocodeOptions;
use crate::error::{Error, Result};
use crate::file;
use crate::progress::Progress;
use crate::store;
use crate::stores::{self, StoreRecord, StoreType};

/// Outcome of one geocode run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub geocoded: usize,
    pub failed: usize,
}

/// Geocode one address; every failure is logged and folded into `None`.
fn resolve(geocoder: &dyn Geocoder, address: &str) -> Option<Coordinates> {
    match geocoder.geocode(address) {
        Ok(c) => {
            logf!("[SUCCESS] Geocoded: {} -> ({}, {})", address, c.lat, c.lng);
            Some(c)
        }
        Err(Error::GeocodeStatus(status)) => {
            logw!("[FAIL] Could not geocode {}: {}", address, status);
            None
        }
        Err(e) => {
            loge!("[ERROR] Exception for {}: {}", address, e);
            None
        }
    }
}

fn attach(row: AddressRow, coords: Option<Coordinates>) -> StoreRecord {
    StoreRecord {
        name: row.store,
        address: row.address,
        phone: row.phone,
        kind: StoreType::parse(&row.kind),
        latitude: coords.map(|c| c.lat),
        longitude: coords.map(|c| c.lng),
    }
}

/// One output record per input row, same order. A failed lookup never stops the batch.
pub fn geocode_rows<P: Pacer>(
    rows: Vec<AddressRow>,
    geocoder: &dyn Geocoder,
    queue: &mut RateLimitedQueue<P>,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<StoreRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }

    let records = queue.run(rows, |i, row| {
        let coords = resolve(geocoder, &row.address);
        if let Some(p) = progress.as_deref_mut() {
            match coords {
                Some(_) => p.item_done(i, &row.store),
                None => p.item_failed(i, &row.store),
            }
        }
        attach(row, coords)
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    records
}

/// Whole stage: read the dump, geocode, write the enriched table.
/// Setup problems (missing file, malformed line) abort before any request is made.
pub fn run<P: Pacer>(
    opts: &GeocodeOptions,
    geocoder: &dyn Geocoder,
    queue: &mut RateLimitedQueue<P>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<GeocodeSummary> {
    let lines = file::read_lines(&opts.input)?;
    let rows = parse_dump(&lines, opts.skip_rows, SplitRule::from_options(opts))?;
    logf!(
        "Geocode: {} stores from {} (delay {:?})",
        rows.len(),
        opts.input.display(),
        queue.delay()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Geocoding {} stores from {}", rows.len(), opts.input.display()));
    }

    let records = geocode_rows(rows, geocoder, queue, progress);
    let geocoded = records.iter().filter(|r| r.coordinates().is_some()).count();

    let out = file::resolve_single_out_path(&opts.output, crate::config::consts::DEFAULT_STORE_FILE)?;
    store::save_dataset(&out, &stores::to_dataset(&records))?;

    let summary = GeocodeSummary {
        path: out,
        rows: records.len(),
        geocoded,
        failed: records.len() - geocoded,
    };
    logf!(
        "Geocoding complete: {} rows ({} geocoded, {} failed) -> {}",
        summary.rows,
        summary.geocoded,
        summary.failed,
        summary.path.display()
    );
    Ok(summary)
}
