use std::path::Path;

use anyhow::Result;

use super::narrow_to_cell;
use crate::params::{ParameterStore, cell_aggregates};
use crate::platform::config::AppConfig;
use crate::services::export;
use crate::services::export::console;
use crate::tools::cli::state::CliContext;

/// Address-list mode: per cell, the ascending distinct addresses.
pub fn execute(
    ctx: &CliContext,
    config: &AppConfig,
    store: &ParameterStore,
    cell: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let logger = ctx.logger();

    let Some(selection) = narrow_to_cell(ctx, store, cell) else {
        return Ok(());
    };
    let cells = cell_aggregates(&selection);

    match cell {
        Some(name) => {
            if let Some(aggregate) = cells.get(name) {
                console::print_cell_list(name, aggregate);
            }
        }
        None => {
            if !ctx.quiet() {
                println!("Cells with address lists:");
                console::print_address_lists(&cells);
            }
        }
    }

    if let Some(requested) = output {
        let path = config.resolve_output(requested);
        export::write_address_lists(&path, &cells)?;
        logger.success(format!("Cell address lists saved to {}", path.display()));
    }

    if !ctx.quiet() {
        let distinct: usize = cells.values().map(|aggregate| aggregate.count()).sum();
        console::print_summary(selection.len(), cells.len(), Some(distinct));
    }

    Ok(())
}
