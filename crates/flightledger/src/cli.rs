//! Command-line interface for flightledger.
//!
//! The `fledger` binary takes only startup flags; the actual commands
//! (`add`, `select`, `display_plane`, `help`, `exit`) are read interactively
//! once the loop is running.

use std::path::PathBuf;

use clap::Parser;

/// fledger - Record flights into a local ledger
///
/// An interactive console utility for recording flight entries (destination,
/// flight number, aircraft type) into a local SQLite store.
#[derive(Debug, Parser)]
#[command(name = "fledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the data file for saving and reading flights
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
