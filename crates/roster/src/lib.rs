pub mod broadcast;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod roster;

pub use broadcast::{DateField, DateUpdateBroadcaster, FormUpdate};
pub use config::{load_config, load_config_or_default, LogFormat, RosterConfig};
pub use db::{Database, DatabaseError};
pub use error::{ConfigError, Result, RosterError};
pub use roster::{
    employment_status, local_today, Employee, EmployeeForm, EmployeeList, EndDatePreset,
    FormError, FormInput, NewEmployee, Partitioned, Role, RosterService, StartDatePreset,
};
