//! CLI module for Recenter.
//!
//! The CLI never talks to the running app: it reads the same configuration
//! file and runs the same planning code.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::RecenterError;
use crate::logging;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), RecenterError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.execute()
}
