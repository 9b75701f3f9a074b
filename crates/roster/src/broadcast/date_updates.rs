//! Date-update channel used by predefined date buttons.
//!
//! A button publishes a [`FormUpdate`]; whichever form is active subscribes
//! and patches the named field.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::roster::form::{EmployeeForm, FormError};

/// Date fields of the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateField {
    StartDate,
    EndDate,
}

/// A date chosen outside the form, or `None` to clear the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormUpdate {
    pub field: DateField,
    pub value: Option<NaiveDate>,
}

impl FormUpdate {
    pub fn new(field: DateField, value: Option<NaiveDate>) -> Self {
        Self { field, value }
    }
}

/// Broadcasts date updates to subscribed forms.
#[derive(Clone)]
pub struct DateUpdateBroadcaster {
    sender: Arc<broadcast::Sender<FormUpdate>>,
}

impl DateUpdateBroadcaster {
    /// Creates a new broadcaster with the specified channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Sends an update to all subscribers.
    pub fn send(&self, update: FormUpdate) {
        // No active form is fine
        let _ = self.sender.send(update);
    }

    /// Creates a new subscriber.
    pub fn subscribe(&self) -> broadcast::Receiver<FormUpdate> {
        self.sender.subscribe()
    }
}

impl Default for DateUpdateBroadcaster {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Applies every pending update on `rx` to `form`, returning how many were
/// applied. Stops at the first update the form rejects.
pub fn drain_into(
    rx: &mut broadcast::Receiver<FormUpdate>,
    form: &mut EmployeeForm,
) -> Result<usize, FormError> {
    let mut applied = 0;
    loop {
        match rx.try_recv() {
            Ok(update) => {
                form.apply_update(&update)?;
                applied += 1;
            }
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Date update receiver lagged");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return Ok(applied),
        }
    }
}
