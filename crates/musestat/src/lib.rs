//! # musestat
//!
//! **CLI Binary**
//!
//! Entry point for the `musestat` command-line application. It resolves
//! configuration, installs logging and dispatches to the subcommands.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load `musestat.toml` and merge CLI overrides
//! * Dispatch commands to handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

pub mod cli;
mod commands;
mod config;
mod error_hints;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

/// Parse the process arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    let config = config::load(&cli.global)?;
    commands::dispatch(cli.command, &config)
}

/// Render an error chain plus any troubleshooting hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
