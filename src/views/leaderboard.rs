// src/views/leaderboard.rs
use crate::core::numeric::{change, fmt_signed_thousands, fmt_thousands, PercentChange};
use crate::data::DataContext;

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub entity: String,
    pub latest: u64,
    pub previous: Option<u64>,
    pub change: Option<i64>,
    pub pct_change: PercentChange,
}

impl LeaderboardEntry {
    /// Display cells: Company, Latest Visits, Previous Visits, Change, % Change.
    pub fn cells(&self) -> Vec<String> {
        let na = || s!("n/a");
        vec![
            self.entity.clone(),
            fmt_thousands(self.latest),
            self.previous.map(fmt_thousands).unwrap_or_else(na),
            self.change.map(fmt_signed_thousands).unwrap_or_else(na),
            self.pct_change.to_string(),
        ]
    }
}

pub const LEADERBOARD_HEADERS: [&str; 5] =
    ["Company", "Latest Visits", "Previous Visits", "Change", "% Change"];

/// Entities ranked by their most recent visit count, highest first.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardView {
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardView {
    /// Stable sort: ties keep the table's column order.
    pub fn compute(data: &DataContext) -> Self {
        let t = &data.traffic;
        if t.is_empty() {
            return Self { entries: Vec::new() };
        }

        let mut entries: Vec<LeaderboardEntry> = t
            .entities()
            .iter()
            .enumerate()
            .map(|(ei, name)| {
                let latest = t.latest(ei).unwrap_or(0);
                let previous = t.previous(ei);
                LeaderboardEntry {
                    entity: name.clone(),
                    latest,
                    previous,
                    change: previous.map(|p| change(p, latest)),
                    pct_change: PercentChange::between(previous, latest),
                }
            })
            .collect();

        entries.sort_by(|a, b| b.latest.cmp(&a.latest));
        Self { entries }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.entries.iter().map(LeaderboardEntry::cells).collect()
    }
}
