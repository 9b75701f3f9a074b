//! Employee record types and the closed list of job titles.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored employee. The `id` is assigned by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Current-employment flag, derived when the record was last written.
    pub employment_status: bool,
}

/// An employee that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub employment_status: bool,
}

impl NewEmployee {
    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            role: self.role,
            start_date: self.start_date,
            end_date: self.end_date,
            employment_status: self.employment_status,
        }
    }
}

/// Job titles offered by the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    ProductDesigner,
    FlutterDeveloper,
    QaTester,
    ProductOwner,
    FullStackDeveloper,
    SeniorSoftwareDeveloper,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::ProductDesigner,
        Role::FlutterDeveloper,
        Role::QaTester,
        Role::ProductOwner,
        Role::FullStackDeveloper,
        Role::SeniorSoftwareDeveloper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ProductDesigner => "Product Designer",
            Role::FlutterDeveloper => "Flutter Developer",
            Role::QaTester => "QA Tester",
            Role::ProductOwner => "Product Owner",
            Role::FullStackDeveloper => "Full-stack Developer",
            Role::SeniorSoftwareDeveloper => "Senior Software Developer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized job title.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Matches titles case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
