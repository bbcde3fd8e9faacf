use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::params::{ParameterStore, cell_aggregates};
use crate::platform::config::AppConfig;
use crate::profile::descriptor;
use crate::profile::presets::Card;
use crate::profile::resolver::resolve_catalogue;
use crate::shared::error::ScanError;
use crate::tools::cli::state::CliContext;

/// Profile-metadata mode: resolve the catalogue and emit the document to
/// a file or to stdout.
pub fn execute(
    ctx: &CliContext,
    config: &AppConfig,
    store: &ParameterStore,
    card: Option<Card>,
    version: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let logger = ctx.logger();

    let cells = cell_aggregates(store);
    let resolved = resolve_catalogue(store, &cells);
    let document = descriptor::render(&resolved, card, version);

    match output {
        Some(requested) => {
            let path = config.resolve_output(requested);
            fs::write(&path, &document).map_err(|source| ScanError::WriteFailure {
                path: path.clone(),
                source,
            })?;
            logger.success(format!("Profile metadata saved to {}", path.display()));
        }
        None => println!("{}", document),
    }

    Ok(())
}
