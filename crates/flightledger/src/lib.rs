//! `flightledger` - An interactive ledger of flight records
//!
//! This library provides the core functionality for the `fledger` binary:
//! a blocking command loop over an in-memory list of flight records,
//! mirrored into a local `SQLite` store.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod repl;
pub mod storage;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
pub use flight::{Flight, Ledger};
pub use logging::init_logging;
pub use repl::{Command, Outcome};
pub use storage::Store;
