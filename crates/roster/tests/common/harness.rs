//! Test harness owning a temporary record store.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use roster::{Database, EmployeeList, RosterService};

pub struct TestHarness {
    temp_dir: TempDir,
    /// Path of the store file inside `temp_dir`.
    pub db_path: PathBuf,
    pub db: Database,
    pub list: EmployeeList,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("data").join("employee-management.db");
        let db = Database::open(&db_path).expect("Failed to open record store");

        Self {
            temp_dir,
            db_path,
            db,
            list: EmployeeList::new(),
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn service(&self) -> RosterService<'_> {
        RosterService::new(&self.db, &self.list)
    }

    /// Opens a second handle on the same file, as a new session would.
    pub fn reopen(&self) -> Database {
        Database::open(&self.db_path).expect("Failed to reopen record store")
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
