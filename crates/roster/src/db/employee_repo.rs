//! Employee repository: CRUD operations for the `employee_data` table.

use rusqlite::{params, Row};

use super::{Database, DatabaseError};
use crate::roster::employee::{Employee, NewEmployee};

fn employee_from_row(row: &Row<'_>) -> Result<Employee, rusqlite::Error> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        role: row.get("role")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        employment_status: row.get("employment_status")?,
    })
}

/// Returns every stored employee in ascending id order.
pub fn fetch_all(db: &Database) -> Result<Vec<Employee>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, name, role, start_date, end_date, employment_status
             FROM employee_data ORDER BY id",
        )?;
        let rows = stmt
            .query_map([], employee_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Finds an employee by id.
pub fn find_by_id(db: &Database, id: i64) -> Result<Option<Employee>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, name, role, start_date, end_date, employment_status
             FROM employee_data WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], employee_from_row)?;
        match rows.next() {
            Some(Ok(row)) => Ok(Some(row)),
            Some(Err(e)) => Err(DatabaseError::Storage(e)),
            None => Ok(None),
        }
    })
}

/// Inserts a new employee and returns the id assigned by the store.
pub fn insert(db: &Database, employee: &NewEmployee) -> Result<i64, DatabaseError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO employee_data (name, role, start_date, end_date, employment_status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                employee.name,
                employee.role,
                employee.start_date,
                employee.end_date,
                employee.employment_status,
            ],
        )
        .map_err(DatabaseError::from_write)?;
        Ok(conn.last_insert_rowid())
    })
}

/// Replaces every field of the stored employee with the same id.
///
/// Fails with [`DatabaseError::NotFound`] when no such id is stored.
pub fn update(db: &Database, employee: &Employee) -> Result<(), DatabaseError> {
    db.with_conn(|conn| {
        let changed = conn
            .execute(
                "UPDATE employee_data SET name=?2, role=?3, start_date=?4, end_date=?5,
                 employment_status=?6
                 WHERE id=?1",
                params![
                    employee.id,
                    employee.name,
                    employee.role,
                    employee.start_date,
                    employee.end_date,
                    employee.employment_status,
                ],
            )
            .map_err(DatabaseError::from_write)?;
        if changed == 0 {
            return Err(DatabaseError::NotFound(employee.id));
        }
        Ok(())
    })
}

/// Deletes the employee with the given id. Deleting an unknown id succeeds.
pub fn remove(db: &Database, id: i64) -> Result<(), DatabaseError> {
    db.with_conn(|conn| {
        let deleted = conn.execute("DELETE FROM employee_data WHERE id = ?1", params![id])?;
        if deleted == 0 {
            log::debug!("remove: employee {} was not stored", id);
        }
        Ok(())
    })
}
