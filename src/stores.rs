// src/stores.rs
use std::fmt;
use std::path::Path;

use crate::config::consts::STORE_HEADERS;
use crate::core::numeric::parse_coordinate;
use crate::error::Result;
use crate::store::{self, DataSet};

/// Store category. Two labels are known to the map; the rest pass through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StoreType {
    Ils,
    Aidacare,
    Other(String),
}

impl StoreType {
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "ILS" => StoreType::Ils,
            "Aidacare" => StoreType::Aidacare,
            other => StoreType::Other(s!(other)),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StoreType::Ils => "ILS",
            StoreType::Aidacare => "Aidacare",
            StoreType::Other(s) => s,
        }
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoreRecord {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub kind: StoreType,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StoreRecord {
    /// Both coordinates, or nothing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Row in `STORE_HEADERS` order; absent coordinates become empty cells.
    pub fn to_row(&self) -> Vec<String> {
        let coord = |c: Option<f64>| c.map(|v| v.to_string()).unwrap_or_default();
        vec![
            self.name.clone(),
            self.address.clone(),
            self.phone.clone(),
            s!(self.kind.label()),
            coord(self.latitude),
            coord(self.longitude),
        ]
    }

    /// Read a row located by `cols`; short rows and bad numbers read as absent.
    fn from_row(ds: &DataSet, row: usize, cols: &StoreColumns) -> Self {
        let get = |c: Option<usize>| c.map(|ci| ds.cell(row, ci).trim()).unwrap_or("");
        Self {
            name: s!(get(cols.store)),
            address: s!(get(cols.address)),
            phone: s!(get(cols.phone)),
            kind: StoreType::parse(get(cols.kind)),
            latitude: parse_coordinate(get(cols.lat)),
            longitude: parse_coordinate(get(cols.lng)),
        }
    }
}

struct StoreColumns {
    store: Option<usize>,
    address: Option<usize>,
    phone: Option<usize>,
    kind: Option<usize>,
    lat: Option<usize>,
    lng: Option<usize>,
}

impl StoreColumns {
    fn locate(ds: &DataSet) -> Self {
        let [store, address, phone, kind, lat, lng] = STORE_HEADERS.map(|h| ds.column_index(h));
        Self { store, address, phone, kind, lat, lng }
    }
}

pub fn store_headers() -> Vec<String> {
    STORE_HEADERS.iter().map(|h| s!(*h)).collect()
}

pub fn to_dataset(records: &[StoreRecord]) -> DataSet {
    DataSet::new(store_headers(), records.iter().map(StoreRecord::to_row).collect())
}

pub fn from_dataset(ds: &DataSet) -> Vec<StoreRecord> {
    let cols = StoreColumns::locate(ds);
    (0..ds.row_count())
        .map(|i| StoreRecord::from_row(ds, i, &cols))
        .collect()
}

/// Load the enriched store table written by the geocode stage.
pub fn load(path: &Path) -> Result<Vec<StoreRecord>> {
    let ds = store::load_dataset(path)?;
    Ok(from_dataset(&ds))
}
