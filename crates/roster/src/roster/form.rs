//! Add/edit form model for an employee.
//!
//! Holds the in-progress field values, enforces required fields and date
//! ordering, and derives the employment status when the form is finalized.

use chrono::NaiveDate;
use thiserror::Error;

use super::employee::{Employee, NewEmployee, Role};
use super::status::employment_status;
use crate::broadcast::{DateField, FormUpdate};

/// Form validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("End date cannot be set before a start date is selected")]
    EndDateDisabled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    name: String,
    role: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    dirty: bool,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled from a stored employee, for editing.
    pub fn for_employee(employee: &Employee) -> Self {
        let mut form = Self::new();
        form.patch_from(employee);
        form
    }

    /// Loads all fields from a stored employee. Leaves the form clean.
    pub fn patch_from(&mut self, employee: &Employee) {
        self.name = employee.name.clone();
        self.role = Some(employee.role.clone());
        self.start_date = Some(employee.start_date);
        self.end_date = employee.end_date;
        self.dirty = false;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.dirty = true;
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = Some(role.into());
        self.dirty = true;
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
        self.dirty = true;
    }

    /// Sets or clears the end date. Setting one requires a start date.
    pub fn set_end_date(&mut self, date: Option<NaiveDate>) -> Result<(), FormError> {
        if date.is_some() && !self.end_date_enabled() {
            return Err(FormError::EndDateDisabled);
        }
        self.end_date = date;
        self.dirty = true;
        Ok(())
    }

    /// The end date becomes editable once a start date is selected.
    pub fn end_date_enabled(&self) -> bool {
        self.start_date.is_some()
    }

    /// Earliest date the end-date picker offers.
    pub fn min_end_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Whether the end-date picker offers `date` (strictly after the start).
    pub fn end_date_allowed(&self, date: NaiveDate) -> bool {
        match self.min_end_date() {
            Some(min) => date > min,
            None => true,
        }
    }

    /// Applies a date chosen through a predefined date button.
    pub fn apply_update(&mut self, update: &FormUpdate) -> Result<(), FormError> {
        match update.field {
            DateField::StartDate => self.set_start_date(update.value),
            DateField::EndDate => self.set_end_date(update.value)?,
        }
        Ok(())
    }

    /// Checks required fields and date ordering.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        let role = self.role.as_deref().ok_or(FormError::MissingField("role"))?;
        if role.parse::<Role>().is_err() {
            return Err(FormError::UnknownRole(role.to_string()));
        }
        let start = self.start_date.ok_or(FormError::MissingField("startDate"))?;
        if let Some(end) = self.end_date {
            if end < start {
                return Err(FormError::EndBeforeStart { start, end });
            }
        }
        Ok(())
    }

    /// Validates the form and builds the record to store, deriving the
    /// employment status against `today`.
    pub fn finalize(&self, today: NaiveDate) -> Result<NewEmployee, FormError> {
        self.validate()?;

        let start_date = self.start_date.ok_or(FormError::MissingField("startDate"))?;
        let role = self
            .role
            .as_deref()
            .and_then(|r| r.parse::<Role>().ok())
            .ok_or(FormError::MissingField("role"))?;

        Ok(NewEmployee {
            name: self.name.trim().to_string(),
            role: role.as_str().to_string(),
            start_date,
            end_date: self.end_date,
            employment_status: employment_status(start_date, self.end_date, today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled() -> EmployeeForm {
        let mut form = EmployeeForm::new();
        form.set_name("Sam");
        form.set_role("QA Tester");
        form.set_start_date(Some(date(2024, 1, 1)));
        form
    }

    #[test]
    fn test_new_form_is_clean_and_end_disabled() {
        let form = EmployeeForm::new();
        assert!(!form.is_dirty());
        assert!(!form.end_date_enabled());
        assert!(form.end_date_allowed(date(2000, 1, 1)));
    }

    #[test]
    fn test_end_date_requires_start() {
        let mut form = EmployeeForm::new();
        assert_eq!(
            form.set_end_date(Some(date(2024, 6, 1))),
            Err(FormError::EndDateDisabled)
        );
        // Clearing is always allowed.
        form.set_end_date(None).unwrap();
    }

    #[test]
    fn test_selecting_start_enables_end() {
        let mut form = EmployeeForm::new();
        form.set_start_date(Some(date(2024, 1, 1)));
        assert!(form.end_date_enabled());
        assert_eq!(form.min_end_date(), Some(date(2024, 1, 1)));
        assert!(!form.end_date_allowed(date(2024, 1, 1)));
        assert!(form.end_date_allowed(date(2024, 1, 2)));
    }

    #[test]
    fn test_missing_fields() {
        let mut form = EmployeeForm::new();
        assert_eq!(form.validate(), Err(FormError::MissingField("name")));

        form.set_name("   ");
        assert_eq!(form.validate(), Err(FormError::MissingField("name")));

        form.set_name("Sam");
        assert_eq!(form.validate(), Err(FormError::MissingField("role")));

        form.set_role("QA Tester");
        assert_eq!(form.validate(), Err(FormError::MissingField("startDate")));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let mut form = filled();
        form.set_role("Astronaut");
        assert_eq!(
            form.validate(),
            Err(FormError::UnknownRole("Astronaut".to_string()))
        );
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut form = filled();
        form.set_end_date(Some(date(2023, 12, 31))).unwrap();
        assert_eq!(
            form.validate(),
            Err(FormError::EndBeforeStart {
                start: date(2024, 1, 1),
                end: date(2023, 12, 31),
            })
        );
    }

    #[test]
    fn test_finalize_open_ended() {
        let record = filled().finalize(date(2024, 3, 1)).unwrap();
        assert_eq!(record.name, "Sam");
        assert_eq!(record.role, "QA Tester");
        assert_eq!(record.end_date, None);
        assert!(record.employment_status);
    }

    #[test]
    fn test_finalize_normalizes_name_and_role() {
        let mut form = filled();
        form.set_name("  Sam  ");
        form.set_role("qa tester");
        let record = form.finalize(date(2024, 3, 1)).unwrap();
        assert_eq!(record.name, "Sam");
        assert_eq!(record.role, "QA Tester");
    }

    #[test]
    fn test_finalize_status_depends_on_today() {
        let mut form = filled();
        form.set_end_date(Some(date(2024, 6, 1))).unwrap();

        assert!(form.finalize(date(2024, 3, 1)).unwrap().employment_status);
        assert!(!form.finalize(date(2024, 7, 1)).unwrap().employment_status);
    }

    #[test]
    fn test_single_day_assignment_is_valid() {
        let mut form = filled();
        form.set_end_date(Some(date(2024, 1, 1))).unwrap();
        let record = form.finalize(date(2024, 1, 1)).unwrap();
        assert!(record.employment_status);
    }

    #[test]
    fn test_patch_from_employee() {
        let employee = Employee {
            id: 7,
            name: "Alex".to_string(),
            role: "Product Owner".to_string(),
            start_date: date(2022, 2, 2),
            end_date: Some(date(2023, 3, 3)),
            employment_status: false,
        };
        let form = EmployeeForm::for_employee(&employee);

        assert_eq!(form.name(), "Alex");
        assert_eq!(form.role(), Some("Product Owner"));
        assert_eq!(form.start_date(), Some(date(2022, 2, 2)));
        assert_eq!(form.end_date(), Some(date(2023, 3, 3)));
        assert!(form.end_date_enabled());
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_apply_update_marks_dirty() {
        let mut form = EmployeeForm::new();
        form.apply_update(&FormUpdate::new(DateField::StartDate, Some(date(2024, 1, 1))))
            .unwrap();
        assert!(form.is_dirty());
        assert!(form.end_date_enabled());
    }
}
