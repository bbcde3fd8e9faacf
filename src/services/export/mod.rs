pub mod console;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::params::{CellAggregate, ParameterStore};
use crate::shared::error::ScanError;

/// Quote a field when it embeds a delimiter, quote or line break; the
/// aggregate exports join addresses with ", " so their fields need this.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

fn write_csv(path: &Path, rows: &[Vec<String>]) -> Result<(), ScanError> {
    let mut out = String::new();
    for row in rows {
        let encoded: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }

    fs::write(path, out).map_err(|source| ScanError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// One row per record, dump order preserved.
pub fn write_table(path: &Path, store: &ParameterStore) -> Result<(), ScanError> {
    let mut rows = vec![vec![
        "cell_name".to_string(),
        "parameter_name".to_string(),
        "parameter_address".to_string(),
    ]];
    for record in store.all() {
        rows.push(vec![
            record.cell_name.clone(),
            record.parameter_name.clone(),
            record.address.to_string(),
        ]);
    }

    write_csv(path, &rows)
}

/// One row per cell with its ascending distinct addresses.
pub fn write_address_lists(
    path: &Path,
    cells: &BTreeMap<String, CellAggregate>,
) -> Result<(), ScanError> {
    let mut rows = vec![vec![
        "cell_name".to_string(),
        "address_count".to_string(),
        "addresses".to_string(),
    ]];
    for (cell_name, aggregate) in cells {
        let addresses: Vec<String> = aggregate.addresses().map(|a| a.to_string()).collect();
        rows.push(vec![
            cell_name.clone(),
            aggregate.count().to_string(),
            addresses.join(", "),
        ]);
    }

    write_csv(path, &rows)
}

/// One row per cell with its address bounds and display range.
pub fn write_address_ranges(
    path: &Path,
    cells: &BTreeMap<String, CellAggregate>,
) -> Result<(), ScanError> {
    let mut rows = vec![vec![
        "cell_name".to_string(),
        "address_count".to_string(),
        "min_address".to_string(),
        "max_address".to_string(),
        "address_range".to_string(),
    ]];
    for (cell_name, aggregate) in cells {
        rows.push(vec![
            cell_name.clone(),
            aggregate.count().to_string(),
            aggregate.min_address().to_string(),
            aggregate.max_address().to_string(),
            aggregate.display_range(),
        ]);
    }

    write_csv(path, &rows)
}

#[cfg(test)]
#[path = "test_export.rs"]
mod tests;
