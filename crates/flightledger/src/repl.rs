//! Interactive command loop for flightledger.
//!
//! Reads one command per line, case-insensitively, and dispatches to the
//! ledger and store. Generic over the input/output streams so sessions can
//! be scripted in tests.

use std::io::{BufRead, Write};

use comfy_table::{presets, Table};
use tracing::debug;

use crate::error::Result;
use crate::flight::{Flight, Ledger};
use crate::storage::Store;

/// Line printed when a listing or search turns up nothing.
const NOT_FOUND: &str = "No flights found";

/// A parsed interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add one flight interactively.
    Add,
    /// Filter flights by destination. Matched by prefix, so any line
    /// starting with `select` counts.
    Select,
    /// Print the full flight table.
    DisplayPlane,
    /// Print the command list.
    Help,
    /// Save everything and leave.
    Exit,
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parse a command line. Matching is case-insensitive and exact, except
    /// `select`, which matches any line it prefixes.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let lowered = line.to_lowercase();
        match lowered.as_str() {
            "add" => Self::Add,
            "help" => Self::Help,
            "display_plane" => Self::DisplayPlane,
            "exit" => Self::Exit,
            _ if lowered.starts_with("select") => Self::Select,
            _ => Self::Unknown,
        }
    }
}

/// How the command loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The `exit` command ran: the ledger was saved and the caller should
    /// terminate with status 1.
    Exit,
    /// Input ended without an `exit` command; nothing was saved.
    Eof,
}

/// Run the command loop until `exit` or end of input.
///
/// # Errors
///
/// Returns an error if console I/O fails or a storage operation fails.
pub fn run<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    store: &Store,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    loop {
        let Some(line) = prompt(input, output, "Enter a command (\"help\" for commands): ")?
        else {
            return Ok(Outcome::Eof);
        };

        let command = Command::parse(&line);
        debug!("Command: {:?}", command);

        match command {
            Command::Add => {
                if add(ledger, store, input, output)?.is_none() {
                    return Ok(Outcome::Eof);
                }
            }
            Command::Select => {
                if select(ledger, input, output)?.is_none() {
                    return Ok(Outcome::Eof);
                }
            }
            Command::DisplayPlane => display_plane(ledger, output)?,
            Command::Help => help(output)?,
            Command::Exit => {
                writeln!(output, "Goodbye!")?;
                store.save_all(ledger.flights())?;
                return Ok(Outcome::Exit);
            }
            Command::Unknown => writeln!(output, "Invalid command")?,
        }
    }
}

/// Print `text` and read one line, without its trailing newline.
///
/// Returns `None` at end of input. Only the newline is stripped; the rest
/// of the line is kept verbatim.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Keep asking for a flight number until one parses as an integer.
fn prompt_flight_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<i64>> {
    loop {
        let Some(raw) = prompt(input, output, "Flight number: ")? else {
            return Ok(None);
        };
        match raw.trim().parse::<i64>() {
            Ok(number) => return Ok(Some(number)),
            Err(_) => writeln!(output, "Error: '{raw}' is not a valid integer")?,
        }
    }
}

/// Prompt for one flight, append it to the ledger, and mirror it into the
/// store. The two storage inserts are not rolled back on partial failure.
fn add<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    store: &Store,
    input: &mut R,
    output: &mut W,
) -> Result<Option<()>> {
    let Some(destination) = prompt(input, output, "Destination: ")? else {
        return Ok(None);
    };
    let Some(flight_number) = prompt_flight_number(input, output)? else {
        return Ok(None);
    };
    let Some(type_plane) = prompt(input, output, "Plane type: ")? else {
        return Ok(None);
    };

    let flight = Flight::new(destination, flight_number, type_plane);
    ledger.add(flight.clone());
    store.insert_flight(&flight)?;

    Ok(Some(()))
}

/// Prompt for a destination and print every flight going there.
fn select<R: BufRead, W: Write>(
    ledger: &Ledger,
    input: &mut R,
    output: &mut W,
) -> Result<Option<()>> {
    let Some(destination) = prompt(input, output, "Pick a destination: ")? else {
        return Ok(None);
    };

    writeln!(output, "Search results")?;
    let mut found = false;
    for flight in ledger.matching_destination(&destination) {
        if !found {
            writeln!(output, "Flights to this destination")?;
            found = true;
        }
        writeln!(output, "{}........{}", flight.flight_number, flight.type_plane)?;
    }
    if !found {
        writeln!(output, "{NOT_FOUND}")?;
    }

    Ok(Some(()))
}

/// Print the full flight table, or the not-found line if the ledger is empty.
fn display_plane<W: Write>(ledger: &Ledger, output: &mut W) -> Result<()> {
    if ledger.is_empty() {
        writeln!(output, "{NOT_FOUND}")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);
    table.set_header(vec!["#", "Destination", "Plane type", "Flight"]);

    for (idx, flight) in ledger.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            flight.destination.clone(),
            flight.type_plane.clone(),
            flight.flight_number.to_string(),
        ]);
    }

    writeln!(output, "{table}")?;
    Ok(())
}

/// Print the fixed command list.
fn help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(
        output,
        "add - add a flight\n\
         help - list the available commands\n\
         select \"destination\" - list flights going to a destination\n\
         display_plane - show every flight\n\
         exit - save and leave the program"
    )?;
    Ok(())
}
