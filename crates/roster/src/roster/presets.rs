//! Predefined date buttons shown above the start and end date pickers.

use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

use crate::broadcast::{DateField, DateUpdateBroadcaster, FormUpdate};

/// Shortcuts offered by the start-date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDatePreset {
    Today,
    NextMonday,
    NextTuesday,
    AfterOneWeek,
}

/// Shortcuts offered by the end-date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndDatePreset {
    Today,
    NoDate,
}

/// Days from `today` until the next given weekday (counted from Sunday = 0),
/// never zero: asking for Monday on a Monday yields a week later.
fn days_until_next(today: NaiveDate, weekday_from_sunday: u32) -> u64 {
    let current = today.weekday().num_days_from_sunday();
    match (7 + weekday_from_sunday - current) % 7 {
        0 => 7,
        n => u64::from(n),
    }
}

fn add_days(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

impl StartDatePreset {
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            StartDatePreset::Today => today,
            StartDatePreset::NextMonday => add_days(today, days_until_next(today, 1)),
            StartDatePreset::NextTuesday => add_days(today, days_until_next(today, 2)),
            StartDatePreset::AfterOneWeek => add_days(today, 7),
        }
    }

    pub fn update(self, today: NaiveDate) -> FormUpdate {
        FormUpdate::new(DateField::StartDate, Some(self.resolve(today)))
    }

    /// Publishes the resolved date to the active form.
    pub fn press(self, broadcaster: &DateUpdateBroadcaster, today: NaiveDate) {
        broadcaster.send(self.update(today));
    }
}

impl EndDatePreset {
    pub fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            EndDatePreset::Today => Some(today),
            EndDatePreset::NoDate => None,
        }
    }

    pub fn update(self, today: NaiveDate) -> FormUpdate {
        FormUpdate::new(DateField::EndDate, self.resolve(today))
    }

    /// Publishes the resolved date (or a clear) to the active form.
    pub fn press(self, broadcaster: &DateUpdateBroadcaster, today: NaiveDate) {
        broadcaster.send(self.update(today));
    }
}

/// Unrecognized preset name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown date preset '{0}'")]
pub struct UnknownPreset(pub String);

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

impl FromStr for StartDatePreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "today" => Ok(StartDatePreset::Today),
            "next-monday" => Ok(StartDatePreset::NextMonday),
            "next-tuesday" => Ok(StartDatePreset::NextTuesday),
            "after-one-week" => Ok(StartDatePreset::AfterOneWeek),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

impl FromStr for EndDatePreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "today" => Ok(EndDatePreset::Today),
            "no-date" => Ok(EndDatePreset::NoDate),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}
