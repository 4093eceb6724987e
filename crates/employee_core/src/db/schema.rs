//! Employee table definition.
//!
//! The CHECK constraints mirror `Employee::validate()` so rows written around
//! the service still cannot break the stored-record invariants.

use super::DbResult;
use rusqlite::Connection;

pub const EMPLOYEES_TABLE: &str = "employees";

const CREATE_EMPLOYEES_SQL: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(trim(name)) > 0),
    department TEXT,
    salary REAL NOT NULL CHECK (salary > 0)
);";

/// Creates the employee table when it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_EMPLOYEES_SQL)?;
    Ok(())
}
