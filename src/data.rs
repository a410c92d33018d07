// src/data.rs
//
// Read-only data context handed to every dashboard view.
//
// - Loaded once at startup from the two pipeline artifacts.
// - Nothing in the dashboard mutates it or writes it back.

use crate::config::options::DashboardOptions;
use crate::error::Result;
use crate::stores::{self, StoreRecord};
use crate::traffic::TrafficTable;

#[derive(Clone, Debug, Default)]
pub struct DataContext {
    pub traffic: TrafficTable,
    pub stores: Vec<StoreRecord>,
    /// Why the store table is missing, if it is. The map tab shows this instead.
    pub stores_error: Option<String>,
}

impl DataContext {
    pub fn new(traffic: TrafficTable, stores: Vec<StoreRecord>) -> Self {
        Self { traffic, stores, stores_error: None }
    }

    /// Traffic is required; a broken store table only disables the map.
    /// `date_col` is the column the merge joined on.
    pub fn load(opts: &DashboardOptions, date_col: &str) -> Result<Self> {
        let traffic = TrafficTable::load(&opts.traffic, date_col)?;

        let (stores, stores_error) = match stores::load(&opts.stores) {
            Ok(s) => {
                let missing = s.iter().filter(|r| r.coordinates().is_none()).count();
                logf!(
                    "Stores: loaded {} (rows={}, without coordinates={})",
                    opts.stores.display(),
                    s.len(),
                    missing
                );
                (s, None)
            }
            Err(e) => {
                loge!("Stores: {} unavailable ({})", opts.stores.display(), e);
                (Vec::new(), Some(e.to_string()))
            }
        };

        Ok(Self { traffic, stores, stores_error })
    }
}
