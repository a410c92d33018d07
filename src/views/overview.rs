// src/views/overview.rs
use super::Series;
use crate::data::DataContext;

/// All entities overlaid, plus the full table.
#[derive(Clone, Debug, PartialEq)]
pub struct OverviewView {
    pub series: Vec<Series>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl OverviewView {
    pub fn compute(data: &DataContext) -> Self {
        let t = &data.traffic;
        let series = (0..t.entity_count())
            .filter_map(|ei| Series::for_entity(t, ei))
            .collect();
        let (headers, rows) = t.display_rows();
        Self { series, headers, rows }
    }
}
