use once_cell::sync::Lazy;
use regex::Regex;

use super::store::ParameterRecord;

static CELL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Cell Name\s*=\s*(.+)").expect("cell name regex"));
static PARAMETER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Parameter Name\s*=\s*(.+)").expect("parameter name regex"));
// The value must begin with a decimal digit run; trailing content on the
// line is ignored.
static PARAMETER_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Parameter Address\s*=\s*(\d+)").expect("parameter address regex"));

/// Parse one block into a record, or reject it.
///
/// Lines are scanned independently, so the three fields may appear in any
/// order; when a field occurs more than once the last line wins. Blocks
/// missing any field yield `None` and are silently dropped, which keeps a
/// single malformed export block from aborting the rest of the dump.
pub fn extract_record(block: &str) -> Option<ParameterRecord> {
    let mut cell_name = None;
    let mut parameter_name = None;
    let mut address = None;

    for line in block.lines() {
        let line = line.trim();

        if let Some(caps) = CELL_NAME.captures(line) {
            cell_name = Some(caps[1].trim().to_string());
        } else if let Some(caps) = PARAMETER_NAME.captures(line) {
            parameter_name = Some(caps[1].trim().to_string());
        } else if let Some(caps) = PARAMETER_ADDRESS.captures(line) {
            // A digit run too large for u32 leaves the field unset.
            address = caps[1].parse::<u32>().ok();
        }
    }

    Some(ParameterRecord {
        cell_name: cell_name?,
        parameter_name: parameter_name?,
        address: address?,
    })
}
