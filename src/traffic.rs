// src/traffic.rs
//
// Typed traffic table for the dashboard: one date column + one column per entity.
// Built once from the merged CSV; read-only afterwards.

use std::path::Path;

use chrono::NaiveDate;

use crate::core::dates::{fmt_date, parse_date};
use crate::core::numeric::{fmt_thousands, parse_visits};
use crate::error::{Error, Result};
use crate::store::{self, DataSet};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrafficTable {
    /// Header of the date column, as found in the file.
    date_label: String,
    dates: Vec<NaiveDate>,
    entities: Vec<String>,
    /// Column-major: `series[entity][row]`
    series: Vec<Vec<u64>>,
}

impl TrafficTable {
    /// Coerce every non-date column to visit counts and sort rows by date (stable).
    pub fn from_dataset(ds: &DataSet, date_col_name: &str, origin: &Path) -> Result<Self> {
        let date_col = ds.column_index(date_col_name).ok_or_else(|| Error::MissingJoinKey {
            path: origin.to_path_buf(),
            key: s!(date_col_name),
        })?;

        let entities: Vec<(usize, String)> = ds
            .headers
            .iter()
            .flatten()
            .enumerate()
            .filter(|(ci, _)| *ci != date_col)
            .map(|(ci, h)| (ci, h.trim().to_string()))
            .collect();

        let mut rows: Vec<(NaiveDate, Vec<u64>)> = Vec::with_capacity(ds.row_count());
        for ri in 0..ds.row_count() {
            let raw = ds.cell(ri, date_col);
            let date = parse_date(raw).ok_or_else(|| Error::BadDate(s!(raw)))?;
            let values = entities.iter().map(|(ci, _)| parse_visits(ds.cell(ri, *ci))).collect();
            rows.push((date, values));
        }
        rows.sort_by_key(|(d, _)| *d);

        let mut series = vec![Vec::with_capacity(rows.len()); entities.len()];
        let mut dates = Vec::with_capacity(rows.len());
        for (d, values) in rows {
            dates.push(d);
            for (ei, v) in values.into_iter().enumerate() {
                series[ei].push(v);
            }
        }

        Ok(Self {
            date_label: s!(date_col_name.trim()),
            dates,
            entities: entities.into_iter().map(|(_, h)| h).collect(),
            series,
        })
    }

    pub fn load(path: &Path, date_col_name: &str) -> Result<Self> {
        let ds = store::load_dataset(path)?;
        let t = Self::from_dataset(&ds, date_col_name, path)?;
        logf!(
            "Traffic: loaded {} (dates={}, entities={})",
            path.display(),
            t.len(),
            t.entity_count()
        );
        Ok(t)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn entity_index(&self, name: &str) -> Option<usize> {
        self.entities.iter().position(|e| e == name)
    }

    pub fn series(&self, entity: usize) -> &[u64] {
        self.series.get(entity).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Most recent value for an entity.
    pub fn latest(&self, entity: usize) -> Option<u64> {
        self.series(entity).last().copied()
    }

    /// The value one record before the most recent.
    pub fn previous(&self, entity: usize) -> Option<u64> {
        let s = self.series(entity);
        s.len().checked_sub(2).map(|i| s[i])
    }

    /// Header + rows for the on-screen table (dates and counts formatted).
    pub fn display_rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let mut headers = vec![self.date_label.clone()];
        headers.extend(self.entities.iter().cloned());

        let rows = (0..self.len())
            .map(|ri| {
                let mut row = vec![fmt_date(self.dates[ri])];
                row.extend(self.series.iter().map(|s| fmt_thousands(s[ri])));
                row
            })
            .collect();
        (headers, rows)
    }
}
