//! Storage layer for flightledger.
//!
//! This module provides `SQLite`-based persistent storage for flight records.
//! The store holds only the database path: every operation opens a fresh
//! connection and drops it when done, so no handle outlives a single call.

pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::flight::Flight;

/// Persistent store for flight records.
///
/// Backed by a `SQLite` file with two tables, `flights` and `plane_types`.
/// Connections are scoped to each call; there is no long-lived handle and
/// no atomicity across calls.
#[derive(Debug, Clone)]
pub struct Store {
    /// Path to the database file.
    path: PathBuf,
}

impl Store {
    /// Open or create a store at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist
    /// and ensures both tables are present.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let store = Self { path };
        let conn = store.connect()?;
        schema::ensure_schema(&conn)?;

        info!("Store opened at {}", store.path.display());
        Ok(store)
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection for one operation.
    fn connect(&self) -> Result<Connection> {
        debug!("Opening database at {}", self.path.display());
        Connection::open(&self.path).map_err(|source| Error::DatabaseOpen {
            path: self.path.clone(),
            source,
        })
    }

    /// Load all flight rows, in row-id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn load_flights(&self) -> Result<Vec<Flight>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT destination, flight_number, type_plane FROM flights")?;

        let flights = stmt
            .query_map([], Self::row_to_flight)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Loaded {} flights", flights.len());
        Ok(flights)
    }

    /// Insert one flight and its plane type.
    ///
    /// Performs two separate inserts on one short-lived connection, without
    /// a transaction: if the second insert fails the first is not rolled
    /// back. Returns the row id assigned to the flight.
    ///
    /// # Errors
    ///
    /// Returns an error if either insert fails.
    pub fn insert_flight(&self, flight: &Flight) -> Result<i64> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO flights (destination, flight_number, type_plane) VALUES (?1, ?2, ?3)",
            params![flight.destination, flight.flight_number, flight.type_plane],
        )?;
        let id = conn.last_insert_rowid();

        conn.execute(
            "INSERT INTO plane_types (type_plane) VALUES (?1)",
            params![flight.type_plane],
        )?;

        debug!("Inserted flight with id {}", id);
        Ok(id)
    }

    /// Overwrite the store with the given flights.
    ///
    /// Deletes every row in both tables, then reinserts one `flights` row
    /// and one `plane_types` row per record. Runs as a single transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn save_all(&self, flights: &[Flight]) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM flights", [])?;
        tx.execute("DELETE FROM plane_types", [])?;

        for flight in flights {
            tx.execute(
                "INSERT INTO flights (destination, flight_number, type_plane) VALUES (?1, ?2, ?3)",
                params![flight.destination, flight.flight_number, flight.type_plane],
            )?;
            tx.execute(
                "INSERT INTO plane_types (type_plane) VALUES (?1)",
                params![flight.type_plane],
            )?;
        }

        tx.commit()?;
        info!("Saved {} flights", flights.len());
        Ok(())
    }

    /// Count rows in the flights table.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count_flights(&self) -> Result<i64> {
        let conn = self.connect()?;
        let count = conn.query_row("SELECT COUNT(*) FROM flights", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Count rows in the plane types table.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count_plane_types(&self) -> Result<i64> {
        let conn = self.connect()?;
        let count = conn.query_row("SELECT COUNT(*) FROM plane_types", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Convert a database row to a Flight struct.
    fn row_to_flight(row: &rusqlite::Row) -> rusqlite::Result<Flight> {
        Ok(Flight {
            destination: row.get(0)?,
            flight_number: row.get(1)?,
            type_plane: row.get(2)?,
        })
    }
}
