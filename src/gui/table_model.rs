// src/gui/table_model.rs
//! Display-ready table handed to `components::data_table`.
//!
//! Every cell is already formatted text; the table widget only lays it out.

#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn with(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Headers given as static labels (leaderboard and the like).
    pub fn with_labels(labels: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self::with(Some(labels.iter().map(|l| s!(*l)).collect()), rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn header(&self, ci: usize) -> String {
        self.headers
            .as_ref()
            .and_then(|h| h.get(ci).cloned())
            .unwrap_or_else(|| format!("Col {}", ci + 1))
    }

    pub fn cell(&self, ri: usize, ci: usize) -> &str {
        self.rows
            .get(ri)
            .and_then(|r| r.get(ci))
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_prefers_headers() {
        let t = TableData::with_labels(&["A", "B"], vec![vec![s!("1")]]);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t.cell(0, 1), "");
        assert_eq!(t.header(5), "Col 6");

        let t = TableData::with(None, vec![vec![s!("x"), s!("y"), s!("z")]]);
        assert_eq!(t.ncols(), 3);
        assert!(TableData::default().is_empty());
    }
}
