//! Schema setup for the record store.
//!
//! The store has exactly one schema version. Applied versions are tracked in
//! a `_migrations` table so reopening an existing file never recreates the
//! employee table.

use rusqlite::Connection;

use super::error::DatabaseError;

/// Schema version of the record store.
pub const SCHEMA_VERSION: u32 = 1;

/// Name of the single employee table.
pub const TABLE_NAME: &str = "employee_data";

struct Migration {
    version: u32,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: SCHEMA_VERSION,
    description: "create_employee_data_table",
    sql: include_str!("sql/001_create_employee_data.sql"),
}];

/// Applies the schema if it has not been applied yet.
pub fn run_all(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            version INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let current_version = current_version(conn)?;
    if current_version > SCHEMA_VERSION {
        return Err(DatabaseError::Migration {
            version: current_version,
            reason: format!(
                "store was written by a newer schema (supported: v{})",
                SCHEMA_VERSION
            ),
        });
    }

    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        log::info!(
            "Running migration v{}: {}",
            migration.version,
            migration.description
        );

        conn.execute_batch(migration.sql)
            .map_err(|e| DatabaseError::Migration {
                version: migration.version,
                reason: e.to_string(),
            })?;

        conn.execute(
            "INSERT INTO _migrations (version, description) VALUES (?1, ?2)",
            rusqlite::params![migration.version, migration.description],
        )?;
    }

    Ok(())
}

/// Returns the highest applied schema version, 0 for a fresh store.
pub fn current_version(conn: &Connection) -> Result<u32, DatabaseError> {
    let version: u32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM _migrations",
        [],
        |r| r.get(0),
    )?;
    Ok(version)
}
