//! `SQLite` schema definitions for flightledger.

use rusqlite::Connection;

use crate::error::Result;

/// SQL statement to create the flights table.
pub const CREATE_FLIGHTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS flights (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    destination TEXT,
    flight_number INTEGER,
    type_plane TEXT
)
";

/// SQL statement to create the plane types table.
///
/// Write-only: rows are inserted on every add and on exit-time save, and
/// never deduplicated or queried back.
pub const CREATE_PLANE_TYPES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS plane_types (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type_plane TEXT
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_FLIGHTS_TABLE, CREATE_PLANE_TYPES_TABLE];

/// Create both tables if they don't exist.
///
/// # Errors
///
/// Returns an error if a DDL statement fails.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        conn.execute(statement, [])?;
    }
    Ok(())
}
