use clap::Parser;

use pathfinder_log::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_diagnostics_from_settings(&settings)?;

    tracing::debug!(logger = %settings.logger, "Configuration loaded");

    cli::execute_command(&cli, settings)
}
