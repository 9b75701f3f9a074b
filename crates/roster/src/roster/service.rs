//! Roster operations used by the list and form views.
//!
//! Every write goes to the record store first; the shared list is only
//! touched after the store reports success, so a failed operation leaves
//! both unchanged. Failures are logged here and returned to the caller.

use chrono::NaiveDate;
use tracing::{debug, error, info, info_span};

use super::employee::Employee;
use super::form::EmployeeForm;
use super::list::{EmployeeList, Partitioned};
use crate::db::{employee_repo, Database};
use crate::error::{Result, RosterError};

fn logged<T, E>(operation: &str, result: std::result::Result<T, E>) -> Result<T>
where
    E: Into<RosterError>,
{
    result.map_err(|e| {
        let err: RosterError = e.into();
        error!(operation, error = %err, "Roster operation failed");
        err
    })
}

pub struct RosterService<'a> {
    db: &'a Database,
    list: &'a EmployeeList,
}

impl<'a> RosterService<'a> {
    pub fn new(db: &'a Database, list: &'a EmployeeList) -> Self {
        Self { db, list }
    }

    /// Fetches every record into the shared list and splits it into
    /// current and previous employees.
    pub fn load(&self) -> Result<Partitioned> {
        let _span = info_span!("load_employees").entered();

        let employees = logged("load", employee_repo::fetch_all(self.db))?;
        debug!(count = employees.len(), "Loaded employees");
        self.list.set(employees);
        Ok(self.list.partition())
    }

    /// Looks up an employee for editing, fetching the list first if it has
    /// not been loaded yet.
    pub fn load_for_edit(&self, id: i64) -> Result<Option<Employee>> {
        let _span = info_span!("load_for_edit", id).entered();

        if self.list.is_empty() {
            let employees = logged("load_for_edit", employee_repo::fetch_all(self.db))?;
            self.list.set(employees);
        }
        Ok(self.list.find(id))
    }

    /// Stores the form as a new employee, or as a full replacement of
    /// `editing` when given, with the status derived against `today`.
    pub fn save(
        &self,
        form: &EmployeeForm,
        editing: Option<i64>,
        today: NaiveDate,
    ) -> Result<Employee> {
        let _span = info_span!("save_employee", editing = ?editing).entered();

        let record = logged("save", form.finalize(today))?;

        match editing {
            Some(id) => {
                let updated = record.with_id(id);
                logged("update", employee_repo::update(self.db, &updated))?;
                self.list.update(|employees| {
                    match employees.iter_mut().find(|e| e.id == id) {
                        Some(existing) => *existing = updated.clone(),
                        None => employees.push(updated.clone()),
                    }
                });
                info!(id, current = updated.employment_status, "Employee updated");
                Ok(updated)
            }
            None => {
                let id = logged("insert", employee_repo::insert(self.db, &record))?;
                let created = record.with_id(id);
                self.list.update(|employees| employees.push(created.clone()));
                info!(id, current = created.employment_status, "Employee added");
                Ok(created)
            }
        }
    }

    /// Deletes an employee and returns the re-partitioned list.
    pub fn delete(&self, id: i64) -> Result<Partitioned> {
        let _span = info_span!("delete_employee", id).entered();

        logged("delete", employee_repo::remove(self.db, id))?;
        self.list.update(|employees| employees.retain(|e| e.id != id));
        info!(id, "Employee deleted");
        Ok(self.list.partition())
    }

    /// Reads one employee straight from the store, bypassing the shared list.
    pub fn find(&self, id: i64) -> Result<Employee> {
        let _span = info_span!("find_employee", id).entered();

        logged("find", employee_repo::find_by_id(self.db, id))?
            .ok_or(RosterError::EmployeeNotFound(id))
    }

    /// Like [`RosterService::load_for_edit`] but treats a missing id as an
    /// error.
    pub fn require(&self, id: i64) -> Result<Employee> {
        self.load_for_edit(id)?.ok_or(RosterError::EmployeeNotFound(id))
    }
}
