// src/views/compare.rs
use super::Series;
use crate::data::DataContext;

/// Overlay of a user-picked subset. Out-of-range picks are ignored; order is the user's.
#[derive(Clone, Debug, PartialEq)]
pub struct CompareView {
    pub series: Vec<Series>,
}

impl CompareView {
    pub fn compute(data: &DataContext, selected: &[usize]) -> Self {
        let mut seen = Vec::with_capacity(selected.len());
        let series = selected
            .iter()
            .filter(|ei| {
                if seen.contains(*ei) {
                    return false;
                }
                seen.push(**ei);
                true
            })
            .filter_map(|&ei| Series::for_entity(&data.traffic, ei))
            .collect();
        Self { series }
    }

    pub fn by_name(data: &DataContext, names: &[&str]) -> Self {
        let idx: Vec<usize> = names
            .iter()
            .filter_map(|n| data.traffic.entity_index(n))
            .collect();
        Self::compute(data, &idx)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
