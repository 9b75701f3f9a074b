//! Record store for employee data.
//!
//! Uses rusqlite (SQLite) with a cloneable `Database` handle. All access is
//! serialized through a `Mutex<Connection>`; each repository call runs a
//! single statement against the one employee table.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

pub mod employee_repo;
pub mod error;
pub mod migrations;

pub use error::DatabaseError;

/// File name of the record store.
pub const DATABASE_FILE_NAME: &str = "employee-management.db";

/// Handle to the record store.
///
/// Cloning is cheap (inner `Arc`).
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the store at the given path and ensures the
    /// schema exists.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::StorageUnavailable {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let conn = Connection::open(path).map_err(|e| DatabaseError::StorageUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        // SQLite opens lazily; the first statements are what touch the file.
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| DatabaseError::StorageUnavailable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        migrations::run_all(&conn).map_err(|e| e.at_open(path))?;

        log::info!("Record store opened at {}", path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens an in-memory store for testing.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn =
            Connection::open_in_memory().map_err(|e| DatabaseError::StorageUnavailable {
                path: PathBuf::from(":memory:"),
                reason: e.to_string(),
            })?;

        migrations::run_all(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Provides locked access to the underlying connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, DatabaseError>
    where
        F: FnOnce(&Connection) -> Result<T, DatabaseError>,
    {
        let conn = self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)?;
        f(&conn)
    }
}

/// Returns the canonical store path: `~/.roster/data/employee-management.db`.
pub fn default_database_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roster").join("data").join(DATABASE_FILE_NAME))
}
