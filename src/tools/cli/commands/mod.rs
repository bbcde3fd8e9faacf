pub mod lists;
pub mod profile;
pub mod ranges;
pub mod table;

use crate::params::ParameterStore;
use crate::tools::cli::state::CliContext;

/// Narrow the store to one cell when a filter was given. Reports and
/// returns `None` when the cell does not occur in the dump.
pub(crate) fn narrow_to_cell(
    ctx: &CliContext,
    store: &ParameterStore,
    cell: Option<&str>,
) -> Option<ParameterStore> {
    let Some(name) = cell else {
        return Some(store.clone());
    };

    let filtered = store.filtered(name);
    if !filtered.is_empty() {
        return Some(filtered);
    }

    let logger = ctx.logger();
    logger.warn(format!("Cell '{}' not found", name));
    logger.warn("Available cells:");
    let mut cells: Vec<&str> = store.unique_cells().into_iter().collect();
    cells.sort_unstable();
    for cell_name in cells {
        logger.warn(format!("  - {}", cell_name));
    }

    None
}
