//! Broadcast channels connecting form-side widgets to the active form.

pub mod date_updates;

pub use date_updates::{DateField, DateUpdateBroadcaster, FormUpdate};
