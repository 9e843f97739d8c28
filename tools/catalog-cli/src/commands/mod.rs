//! CLI command implementations.

pub mod config;
pub mod list;
pub mod shell;
pub mod show;

use catalog_core::catalog::SortKey;
use catalog_core::ProductId;
use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Sort the catalog before printing (id or price).
    #[arg(short, long)]
    pub sort: Option<SortKey>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: ProductId,

    /// Sort the catalog first, which changes the neighbours.
    #[arg(short, long)]
    pub sort: Option<SortKey>,
}

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {
    /// Delete without asking for confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the configuration and its seed fixture.
    Validate,
}
