mod cli;
mod commands;
mod logging;

use almanac_core::config::load_config;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_handle = logging::init(cli.verbose);

    let settings = load_config(cli.config.as_deref())?;
    log_handle.apply_config_level(&settings.logging.level);

    tracing::info!(config = ?settings, "Configuration loaded");

    let stdout = std::io::stdout();
    match &cli.command {
        Command::Expand(args) => commands::expand(&settings, args, stdout.lock()),
        Command::Zones(args) => commands::zones(args, stdout.lock()),
    }
}
