//! Builders for employee forms and records.

#![allow(dead_code)]

use chrono::NaiveDate;

use roster::{EmployeeForm, NewEmployee};

pub struct EmployeeBuilder {
    name: String,
    role: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl EmployeeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            role: "QA Tester".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            end_date: None,
        }
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    pub fn start(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    pub fn end(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn form(&self) -> EmployeeForm {
        let mut form = EmployeeForm::new();
        form.set_name(self.name.as_str());
        form.set_role(self.role.as_str());
        form.set_start_date(Some(self.start_date));
        form.set_end_date(self.end_date)
            .expect("start date is set before end date");
        form
    }

    /// A record as finalized against `today`.
    pub fn record(&self, today: NaiveDate) -> NewEmployee {
        self.form().finalize(today).expect("valid form")
    }
}
