// src/cli/dispatch.rs
//! Command dispatch extracted from the binary to keep main small.

use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers::{self, PartitionArgs};
use crate::config::Config;

/// Loads configuration, applies command-line overrides and executes the
/// parsed command.
///
/// # Errors
/// Returns error if configuration loading or the command handler fails.
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    config.apply_cli(cli.dataset, cli.info, cli.verbose);

    match cli.command {
        Commands::Partition {
            n,
            ancestor,
            protect,
            no_balance,
            json,
        } => handlers::handle_partition(
            &config,
            &PartitionArgs {
                n,
                ancestor,
                protect,
                no_balance,
                json,
            },
        ),
        Commands::Group {
            name,
            no_balance,
            json,
        } => handlers::handle_group(&config, &name, no_balance, json),
        Commands::Info { wnid } => handlers::handle_info(&config, &wnid),
    }
}
