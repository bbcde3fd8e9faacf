pub mod commands;
pub mod state;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::params::ParameterStore;
use crate::platform::config::AppConfig;
use crate::profile::presets::Card;
use crate::shared::error::ScanError;
use state::CliContext;

#[derive(Parser, Debug)]
#[command(name = "paramscan")]
#[command(
    version,
    about = "Extract control parameters from SigmaDSP .params exports."
)]
pub struct Cli {
    /// Path to the .params file to parse
    pub input: PathBuf,

    /// Output CSV file path (or profile metadata path with --xml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Filter by specific cell name
    #[arg(short, long)]
    pub cell: Option<String>,

    /// Group parameters by cell and show distinct address lists
    #[arg(long, default_value_t = false)]
    pub address_lists: bool,

    /// Group parameters by cell and show address ranges [min, max]
    #[arg(long, default_value_t = false)]
    pub address_range: bool,

    /// Output profile metadata instead of CSV
    #[arg(long, default_value_t = false)]
    pub xml: bool,

    /// Card preset for profile metadata generation
    #[arg(long, value_enum)]
    pub card: Option<Card>,

    /// Version number for the profile (defaults to the card preset's)
    #[arg(long)]
    pub profile_version: Option<String>,

    /// Suppress console narration
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CliContext::new(cli.quiet);
    execute(&cli, &ctx)
}

pub fn execute(cli: &Cli, ctx: &CliContext) -> Result<()> {
    let logger = ctx.logger();

    // Conflicting aggregation modes abort before any file is touched.
    if cli.address_lists && cli.address_range {
        logger.error("Cannot use both --address-lists and --address-range at the same time");
        return Err(ScanError::ConflictingModes.into());
    }

    let config = AppConfig::load_or_default()?;

    let store = match ParameterStore::parse_file(&cli.input) {
        Ok(store) => store,
        Err(error) => {
            logger.error(error.to_string());
            return Err(error.into());
        }
    };

    if store.is_empty() {
        logger.warn("No parameters found in the file");
        return Err(ScanError::EmptyInput {
            path: cli.input.clone(),
        }
        .into());
    }

    logger.success(format!(
        "Parsed {} parameters from {}",
        store.len(),
        cli.input.display()
    ));

    // Flags fall back to config defaults.
    let card = cli.card.or(config.profile.card);
    let version = cli
        .profile_version
        .as_deref()
        .or(config.profile.version.as_deref());

    if cli.xml {
        return commands::profile::execute(
            ctx,
            &config,
            &store,
            card,
            version,
            cli.output.as_deref(),
        );
    }
    if cli.address_range {
        return commands::ranges::execute(
            ctx,
            &config,
            &store,
            cli.cell.as_deref(),
            cli.output.as_deref(),
        );
    }
    if cli.address_lists {
        return commands::lists::execute(
            ctx,
            &config,
            &store,
            cli.cell.as_deref(),
            cli.output.as_deref(),
        );
    }
    commands::table::execute(
        ctx,
        &config,
        &store,
        cli.cell.as_deref(),
        cli.output.as_deref(),
    )
}
