use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::blocks::split_blocks;
use super::extract::extract_record;
use crate::shared::error::ScanError;

/// One addressable control instance from a `.params` dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRecord {
    /// Owning logical group, e.g. "Loudspeaker EQ.IIR_A". Not unique.
    pub cell_name: String,
    /// Control name within the cell.
    pub parameter_name: String,
    /// Register address.
    pub address: u32,
}

/// Ordered collection of records from a single parse, block order
/// preserved. Rebuilt wholesale on each parse; all queries are read-only.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    records: Vec<ParameterRecord>,
}

impl ParameterStore {
    pub fn parse(content: &str) -> Self {
        let records = split_blocks(content).filter_map(extract_record).collect();
        Self { records }
    }

    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ScanError::InputAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn all(&self) -> &[ParameterRecord] {
        &self.records
    }

    /// Records belonging to one cell, dump order preserved.
    pub fn by_cell(&self, cell_name: &str) -> Vec<&ParameterRecord> {
        self.records
            .iter()
            .filter(|record| record.cell_name == cell_name)
            .collect()
    }

    /// A new store narrowed to one cell, dump order preserved.
    pub fn filtered(&self, cell_name: &str) -> ParameterStore {
        ParameterStore {
            records: self
                .records
                .iter()
                .filter(|record| record.cell_name == cell_name)
                .cloned()
                .collect(),
        }
    }

    /// Distinct cell names, in no particular order; display paths sort.
    pub fn unique_cells(&self) -> HashSet<&str> {
        self.records
            .iter()
            .map(|record| record.cell_name.as_str())
            .collect()
    }

    /// Address of the last-inserted record with this exact pair.
    pub fn lookup(&self, cell_name: &str, parameter_name: &str) -> Option<u32> {
        self.records
            .iter()
            .rev()
            .find(|record| record.cell_name == cell_name && record.parameter_name == parameter_name)
            .map(|record| record.address)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "test_store.rs"]
mod tests;
