use std::path::Path;

use anyhow::Result;

use super::narrow_to_cell;
use crate::params::ParameterStore;
use crate::platform::config::AppConfig;
use crate::services::export;
use crate::services::export::console;
use crate::tools::cli::state::CliContext;

/// Default mode: individual parameter rows, console and optional CSV.
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

    // A cell-filtered view prints even in quiet mode; the full table is
    // narration and stays silent.
    if let Some(name) = cell {
        println!("Parameters for cell '{}':", name);
        console::print_table(&selection);
    } else if !ctx.quiet() {
        console::print_table(&selection);
    }

    if let Some(requested) = output {
        let path = config.resolve_output(requested);
        export::write_table(&path, &selection)?;
        logger.success(format!("Parameters saved to {}", path.display()));
    }

    if !ctx.quiet() {
        console::print_summary(selection.len(), selection.unique_cells().len(), None);
    }

    Ok(())
}
