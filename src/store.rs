// src/store.rs
use std::path::Path;

use crate::csv::split_headers;
use crate::error::Result;
use crate::file::{read_rows, write_table};

/// Untyped table as it sits on disk: optional header row + string cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers: Some(headers), rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    /// Position of a header cell, compared after trimming.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .as_ref()?
            .iter()
            .position(|h| h.trim() == name.trim())
    }

    /// Cell at (row, col); short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}

/// Load a headed CSV artifact.
pub fn load_dataset(path: &Path) -> Result<DataSet> {
    let rows = read_rows(path)?;
    let (headers, rows) = split_headers(rows);
    logd!("Store: read {} (rows={})", path.display(), rows.len());
    Ok(DataSet { headers, rows })
}

/// Persist a dataset, replacing whatever was there.
pub fn save_dataset(path: &Path, ds: &DataSet) -> Result<()> {
    write_table(path, ds.headers.as_deref(), &ds.rows)?;
    logf!("Store: wrote {} (rows={}, columns={})", path.display(), ds.row_count(), ds.header_count());
    Ok(())
}
