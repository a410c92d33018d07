// src/views/mod.rs
//
// View models: pure functions of the data context (+ the session's picks).
// The GUI only draws what these return, which keeps them testable headless.

pub mod compare;
pub mod detail;
pub mod leaderboard;
pub mod map;
pub mod overview;

use chrono::NaiveDate;

use crate::traffic::TrafficTable;

/// One entity's time series, ready to plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(NaiveDate, u64)>,
}

impl Series {
    pub fn for_entity(traffic: &TrafficTable, entity: usize) -> Option<Self> {
        let name = traffic.entities().get(entity)?.clone();
        let points = traffic
            .dates()
            .iter()
            .copied()
            .zip(traffic.series(entity).iter().copied())
            .collect();
        Some(Self { name, points })
    }
}
