use std::collections::{BTreeMap, BTreeSet};

use super::store::ParameterStore;

/// Distinct register addresses observed for one cell.
///
/// Backed by a true set, so the count can never drift from the stored
/// addresses when a cell repeats an address across records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellAggregate {
    addresses: BTreeSet<u32>,
}

impl CellAggregate {
    fn insert(&mut self, address: u32) {
        self.addresses.insert(address);
    }

    /// Ascending distinct addresses.
    pub fn addresses(&self) -> impl Iterator<Item = u32> + '_ {
        self.addresses.iter().copied()
    }

    pub fn count(&self) -> usize {
        self.addresses.len()
    }

    pub fn min_address(&self) -> u32 {
        self.addresses.first().copied().unwrap_or_default()
    }

    pub fn max_address(&self) -> u32 {
        self.addresses.last().copied().unwrap_or_default()
    }

    /// `min` for a single address, `[min, max]` otherwise.
    pub fn display_range(&self) -> String {
        let (min, max) = (self.min_address(), self.max_address());
        if min == max {
            min.to_string()
        } else {
            format!("[{}, {}]", min, max)
        }
    }
}

/// Aggregate the store's addresses per cell in one pass.
///
/// Pure function of the store contents; recompute after a re-parse. The
/// BTreeMap keeps cells sorted for every display and export path.
pub fn cell_aggregates(store: &ParameterStore) -> BTreeMap<String, CellAggregate> {
    let mut cells: BTreeMap<String, CellAggregate> = BTreeMap::new();

    for record in store.all() {
        cells
            .entry(record.cell_name.clone())
            .or_default()
            .insert(record.address);
    }

    cells
}

#[cfg(test)]
#[path = "test_aggregate.rs"]
mod tests;
