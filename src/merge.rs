// src/merge.rs
//
// Merge stage: N traffic exports -> one table, inner-joined on the date column.
// Values are carried verbatim; numeric clean-up belongs to the dashboard.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::config::options::MergeOptions;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::store::{self, DataSet};

/// One loaded input with its join column located.
#[derive(Clone, Debug)]
pub struct KeyedTable {
    pub path: PathBuf,
    pub data: DataSet,
    key_col: usize,
    index: HashMap<String, usize>,
}

impl KeyedTable {
    /// Locate `key` in the header and index rows by it.
    /// Fails on a missing key column or a key value seen twice.
    pub fn new(path: PathBuf, data: DataSet, key: &str) -> Result<Self> {
        let key_col = data.column_index(key).ok_or_else(|| Error::MissingJoinKey {
            path: path.clone(),
            key: s!(key),
        })?;

        let mut index = HashMap::with_capacity(data.row_count());
        for (i, _) in data.rows.iter().enumerate() {
            let k = data.cell(i, key_col).trim().to_string();
            if index.insert(k.clone(), i).is_some() {
                return Err(Error::DuplicateKey { path, value: k });
            }
        }

        Ok(Self { path, data, key_col, index })
    }

    pub fn load(path: &Path, key: &str) -> Result<Self> {
        let data = store::load_dataset(path)?;
        Self::new(path.to_path_buf(), data, key)
    }

    pub fn contains(&self, key_value: &str) -> bool {
        self.index.contains_key(key_value)
    }

    /// Header cells except the join column.
    fn value_headers(&self) -> Vec<String> {
        self.data
            .headers
            .iter()
            .flatten()
            .enumerate()
            .filter(|(ci, _)| *ci != self.key_col)
            .map(|(_, h)| h.trim().to_string())
            .collect()
    }

    /// Row cells except the join column, padded to the header width.
    fn value_cells(&self, row: usize) -> Vec<String> {
        (0..self.data.header_count())
            .filter(|ci| *ci != self.key_col)
            .map(|ci| s!(self.data.cell(row, ci)))
            .collect()
    }
}

/// Inner-join every table on its key column.
/// Row order follows the first table; a key missing anywhere drops the row.
pub fn join_tables(tables: &[KeyedTable], key: &str) -> Result<DataSet> {
    let Some(first) = tables.first() else {
        return Err(Error::NoInputs);
    };

    let mut headers = vec![s!(key.trim())];
    for t in tables {
        headers.extend(t.value_headers());
    }

    let mut rows = Vec::new();
    for i in 0..first.data.row_count() {
        let k = first.data.cell(i, first.key_col).trim();
        if !tables[1..].iter().all(|t| t.contains(k)) {
            continue;
        }
        let mut row = vec![s!(k)];
        for t in tables {
            let ri = t.index[k];
            row.extend(t.value_cells(ri));
        }
        rows.push(row);
    }

    Ok(DataSet::new(headers, rows))
}

/// Rename header cells in place; the join key column is never renamed.
pub fn apply_renames(ds: &mut DataSet, rename: &BTreeMap<String, String>) {
    if let Some(headers) = ds.headers.as_mut() {
        for h in headers.iter_mut().skip(1) {
            if let Some(to) = rename.get(h.as_str()) {
                logd!("Merge: rename column {h} -> {to}");
                *h = to.clone();
            }
        }
    }
}

/// Entity columns must be unique once renames are applied.
pub fn check_unique_columns(ds: &DataSet) -> Result<()> {
    let mut seen = HashSet::new();
    for h in ds.headers.iter().flatten() {
        if !seen.insert(h.as_str()) {
            return Err(Error::DuplicateColumn(h.clone()));
        }
    }
    Ok(())
}

/// Load, join and rename. Nothing is written; any failure aborts the whole stage.
pub fn merge_inputs(
    opts: &MergeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet> {
    if opts.inputs.is_empty() {
        return Err(Error::NoInputs);
    }
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.inputs.len());
    }

    let mut tables = Vec::with_capacity(opts.inputs.len());
    for (i, path) in opts.inputs.iter().enumerate() {
        let t = KeyedTable::load(path, &opts.join_key)?;
        logf!("Merge: loaded {} (rows={})", path.display(), t.data.row_count());
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, &path.to_string_lossy());
        }
        tables.push(t);
    }

    let mut merged = join_tables(&tables, &opts.join_key)?;
    apply_renames(&mut merged, &opts.rename);
    check_unique_columns(&merged)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Joined {} inputs: {} dates, {} columns",
            tables.len(),
            merged.row_count(),
            merged.header_count()
        ));
        p.finish();
    }
    Ok(merged)
}
