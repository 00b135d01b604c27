//! `fledger` - CLI for flightledger
//!
//! This binary runs the interactive flight ledger: it resolves the data
//! file, loads existing flights, and hands control to the command loop.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use flightledger::repl::{self, Outcome};
use flightledger::{init_logging, Cli, Config, Ledger, Store};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // Resolve the data file: flag, else prompt, else configured default
    let path = resolve_data_file(cli.file, &config, &mut input, &mut output)?;

    let store = Store::open(path)?;
    let mut ledger = Ledger::from_flights(store.load_flights()?);

    match repl::run(&mut ledger, &store, &mut input, &mut output)? {
        // The exit command always terminates with status 1
        Outcome::Exit => std::process::exit(1),
        Outcome::Eof => Ok(()),
    }
}

/// Pick the backing store path.
///
/// Uses `--file` when given; otherwise asks interactively. An empty answer
/// (or end of input) falls back to the configured default path.
fn resolve_data_file<R: BufRead, W: Write>(
    flag: Option<PathBuf>,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> io::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    write!(output, "Enter the data file location: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    if answer.is_empty() {
        Ok(config.database_path())
    } else {
        Ok(PathBuf::from(answer))
    }
}
