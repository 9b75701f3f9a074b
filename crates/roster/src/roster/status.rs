//! Employment-status derivation.
//!
//! The flag is computed once when a record is written and stored with it;
//! list views partition on the stored value and never recompute it.

use chrono::{Local, NaiveDate};

/// Decides whether an employee counts as current on `today`.
///
/// Same-day comparisons count as within range:
/// - no end date: always current
/// - already started (`today >= start`): current while `today <= end`
/// - not started yet: current when the assignment's own range is non-empty
///   (`start <= end`)
pub fn employment_status(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> bool {
    let Some(end) = end else {
        return true;
    };

    if today >= start {
        today <= end
    } else {
        start <= end
    }
}

/// The local calendar date that saves are evaluated against. Time-of-day
/// is dropped here so the rule above only ever sees whole days.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
