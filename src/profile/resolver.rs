use std::collections::BTreeMap;

use super::catalogue::{CATALOGUE, CatalogueEntry, Mapping};
use crate::params::{CellAggregate, ParameterStore};

/// Channel-pattern entries cannot be disambiguated yet; they resolve to
/// this placeholder instead of failing the run.
pub const UNKNOWN_VALUE: &str = "UNKNOWN";

/// Outcome of resolving one catalogue entry against a parsed dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Concrete value to embed in the document: a register address, a
    /// `start/count` bank encoding, or the `UNKNOWN` placeholder.
    Value(String),
    Unmapped,
}

/// A catalogue entry paired with its resolution.
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    pub entry: &'static CatalogueEntry,
    pub resolution: Resolution,
}

/// Resolve one entry. Entries never depend on each other; catalogue order
/// only controls the emitted document order.
pub fn resolve(
    entry: &CatalogueEntry,
    store: &ParameterStore,
    cells: &BTreeMap<String, CellAggregate>,
) -> Resolution {
    match entry.mapping {
        Mapping::Direct { cell, parameter } => match store.lookup(cell, parameter) {
            Some(address) => Resolution::Value(address.to_string()),
            None => Resolution::Unmapped,
        },
        Mapping::FilterBank { cell } => match cells.get(cell) {
            Some(aggregate) => Resolution::Value(format!(
                "{}/{}",
                aggregate.min_address(),
                aggregate.count()
            )),
            None => Resolution::Unmapped,
        },
        // TODO: wire up the substring search over cell and parameter
        // names; until then these entries stay unmapped.
        Mapping::Search { .. } => Resolution::Unmapped,
        // TODO: disambiguate the per-channel gain target behind the
        // shared cell pattern; the placeholder keeps the slot visible.
        Mapping::ChannelPattern { .. } => Resolution::Value(UNKNOWN_VALUE.to_string()),
    }
}

/// Resolve the whole catalogue in declared order.
pub fn resolve_catalogue(
    store: &ParameterStore,
    cells: &BTreeMap<String, CellAggregate>,
) -> Vec<ResolvedEntry> {
    CATALOGUE
        .iter()
        .map(|entry| ResolvedEntry {
            entry,
            resolution: resolve(entry, store, cells),
        })
        .collect()
}

#[cfg(test)]
#[path = "test_resolver.rs"]
mod tests;
