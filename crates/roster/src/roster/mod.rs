//! Employee roster domain: records, status derivation, the add/edit form,
//! date shortcuts, the shared list and the operations tying them together.

pub mod employee;
pub mod form;
pub mod input;
pub mod list;
pub mod presets;
pub mod service;
pub mod status;

pub use employee::{Employee, NewEmployee, Role};
pub use form::{EmployeeForm, FormError};
pub use input::FormInput;
pub use list::{EmployeeList, Partitioned};
pub use presets::{EndDatePreset, StartDatePreset};
pub use service::RosterService;
pub use status::{employment_status, local_today};
