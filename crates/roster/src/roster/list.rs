//! Shared in-memory employee list.
//!
//! One instance is created by the composition root and handed by reference
//! to everything that reads or changes the list, so list and form views see
//! the same records.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use super::employee::Employee;

/// Employees split by their stored employment status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Partitioned {
    pub current: Vec<Employee>,
    pub previous: Vec<Employee>,
}

impl Partitioned {
    /// Buckets records on the flag they carry; nothing is recomputed.
    pub fn from_employees(employees: &[Employee]) -> Self {
        let (current, previous) = employees
            .iter()
            .cloned()
            .partition(|employee| employee.employment_status);
        Self { current, previous }
    }
}

#[derive(Debug, Default)]
pub struct EmployeeList {
    employees: RwLock<Vec<Employee>>,
}

impl EmployeeList {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Employee>> {
        match self.employees.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("Employee list lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Employee>> {
        match self.employees.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("Employee list lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    /// Returns a snapshot of the list.
    pub fn get(&self) -> Vec<Employee> {
        self.read().clone()
    }

    /// Replaces the whole list.
    pub fn set(&self, employees: Vec<Employee>) {
        *self.write() = employees;
    }

    /// Mutates the list in place.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Vec<Employee>),
    {
        let mut guard = self.write();
        f(&mut *guard);
    }

    pub fn find(&self, id: i64) -> Option<Employee> {
        self.read().iter().find(|e| e.id == id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn partition(&self) -> Partitioned {
        Partitioned::from_employees(&self.read())
    }
}
