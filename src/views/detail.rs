// src/views/detail.rs
use chrono::NaiveDate;

use super::Series;
use crate::core::numeric::{change, fmt_signed_thousands, fmt_thousands, PercentChange};
use crate::data::DataContext;

/// One record compared with the record right before it.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRow {
    pub date: NaiveDate,
    pub visits: u64,
    pub previous: Option<u64>,
    pub change: Option<i64>,
    pub pct_change: PercentChange,
}

/// Company Detail tab: per-record deltas plus the headline numbers for the latest record.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub entity: String,
    pub rows: Vec<DetailRow>,
    pub series: Series,
}

impl DetailView {
    /// `None` when the entity index is out of range.
    pub fn compute(data: &DataContext, entity: usize) -> Option<Self> {
        let t = &data.traffic;
        let series = Series::for_entity(t, entity)?;

        let mut prev: Option<u64> = None;
        let rows = series
            .points
            .iter()
            .map(|&(date, visits)| {
                let row = DetailRow {
                    date,
                    visits,
                    previous: prev,
                    change: prev.map(|p| change(p, visits)),
                    pct_change: PercentChange::between(prev, visits),
                };
                prev = Some(visits);
                row
            })
            .collect();

        Some(Self { entity: series.name.clone(), rows, series })
    }

    pub fn latest(&self) -> Option<&DetailRow> {
        self.rows.last()
    }

    /// "Latest Visits" metric.
    pub fn latest_visits_text(&self) -> String {
        self.latest()
            .map(|r| fmt_thousands(r.visits))
            .unwrap_or_else(|| s!("n/a"))
    }

    /// "Monthly Change" metric.
    pub fn monthly_change_text(&self) -> String {
        self.latest()
            .and_then(|r| r.change)
            .map(fmt_signed_thousands)
            .unwrap_or_else(|| s!("n/a"))
    }

    /// "% Change" metric.
    pub fn pct_change_text(&self) -> String {
        self.latest()
            .map(|r| r.pct_change.to_string())
            .unwrap_or_else(|| s!("n/a"))
    }
}
