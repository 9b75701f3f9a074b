//! Field values collected outside the form (command line, scripted input)
//! and applied to an [`EmployeeForm`] in a fixed order.

use chrono::NaiveDate;

use super::form::{EmployeeForm, FormError};
use super::presets::{EndDatePreset, StartDatePreset};
use crate::broadcast::date_updates::drain_into;
use crate::broadcast::DateUpdateBroadcaster;

/// Values to write into a form. Unset fields keep what the form holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: Option<String>,
    pub role: Option<String>,
    pub start: Option<NaiveDate>,
    pub start_preset: Option<StartDatePreset>,
    pub end: Option<NaiveDate>,
    pub end_preset: Option<EndDatePreset>,
    pub clear_end: bool,
}

impl FormInput {
    /// Writes the values into `form`.
    ///
    /// Order: name, role and explicit start date; then presets, which travel
    /// through the date-update channel like the picker buttons; then an
    /// explicit end date; then `clear_end`. A later step wins over an earlier
    /// one touching the same field.
    pub fn apply(&self, form: &mut EmployeeForm, today: NaiveDate) -> Result<(), FormError> {
        if let Some(name) = &self.name {
            form.set_name(name.as_str());
        }
        if let Some(role) = &self.role {
            form.set_role(role.as_str());
        }
        if let Some(start) = self.start {
            form.set_start_date(Some(start));
        }

        if self.start_preset.is_some() || self.end_preset.is_some() {
            let broadcaster = DateUpdateBroadcaster::default();
            let mut rx = broadcaster.subscribe();
            if let Some(preset) = self.start_preset {
                preset.press(&broadcaster, today);
            }
            if let Some(preset) = self.end_preset {
                preset.press(&broadcaster, today);
            }
            let applied = drain_into(&mut rx, form)?;
            log::debug!("Applied {} date preset(s)", applied);
        }

        if let Some(end) = self.end {
            form.set_end_date(Some(end))?;
        }
        if self.clear_end {
            form.set_end_date(None)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::employee::Employee;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // A Wednesday.
    fn today() -> NaiveDate {
        date(2024, 3, 6)
    }

    fn stored() -> Employee {
        Employee {
            id: 7,
            name: "Sam".to_string(),
            role: "QA Tester".to_string(),
            start_date: date(2024, 1, 1),
            end_date: Some(date(2024, 6, 1)),
            employment_status: true,
        }
    }

    #[test]
    fn test_add_with_presets() {
        let input = FormInput {
            name: Some("Alex".to_string()),
            role: Some("Flutter Developer".to_string()),
            start_preset: Some(StartDatePreset::NextMonday),
            end_preset: Some(EndDatePreset::NoDate),
            ..Default::default()
        };
        let mut form = EmployeeForm::new();
        input.apply(&mut form, today()).unwrap();

        assert_eq!(form.name(), "Alex");
        assert_eq!(form.start_date(), Some(date(2024, 3, 11)));
        assert_eq!(form.end_date(), None);

        let record = form.finalize(today()).unwrap();
        assert!(record.employment_status);
    }

    #[test]
    fn test_end_preset_after_start_preset() {
        let input = FormInput {
            start_preset: Some(StartDatePreset::Today),
            end_preset: Some(EndDatePreset::Today),
            ..Default::default()
        };
        let mut form = EmployeeForm::new();
        input.apply(&mut form, today()).unwrap();

        assert_eq!(form.start_date(), Some(today()));
        assert_eq!(form.end_date(), Some(today()));
    }

    #[test]
    fn test_edit_with_clear_end() {
        let input = FormInput {
            clear_end: true,
            ..Default::default()
        };
        let mut form = EmployeeForm::for_employee(&stored());
        input.apply(&mut form, today()).unwrap();

        assert_eq!(form.start_date(), Some(date(2024, 1, 1)));
        assert_eq!(form.end_date(), None);
        assert!(form.is_dirty());
    }

    #[test]
    fn test_end_without_start_is_rejected() {
        let input = FormInput {
            name: Some("Alex".to_string()),
            end: Some(date(2024, 6, 1)),
            ..Default::default()
        };
        let mut form = EmployeeForm::new();
        assert_eq!(
            input.apply(&mut form, today()),
            Err(FormError::EndDateDisabled)
        );
        assert_eq!(form.end_date(), None);
    }

    #[test]
    fn test_end_preset_without_start_is_rejected() {
        let input = FormInput {
            end_preset: Some(EndDatePreset::Today),
            ..Default::default()
        };
        let mut form = EmployeeForm::new();
        assert_eq!(
            input.apply(&mut form, today()),
            Err(FormError::EndDateDisabled)
        );
    }

    #[test]
    fn test_explicit_end_wins_over_end_preset() {
        let input = FormInput {
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 9, 30)),
            end_preset: Some(EndDatePreset::NoDate),
            ..Default::default()
        };
        let mut form = EmployeeForm::new();
        input.apply(&mut form, today()).unwrap();

        assert_eq!(form.end_date(), Some(date(2024, 9, 30)));
    }

    #[test]
    fn test_explicit_start_enables_end_preset() {
        let input = FormInput {
            start: Some(date(2024, 1, 1)),
            end_preset: Some(EndDatePreset::Today),
            ..Default::default()
        };
        let mut form = EmployeeForm::new();
        input.apply(&mut form, today()).unwrap();

        assert_eq!(form.end_date(), Some(today()));
    }

    #[test]
    fn test_empty_input_leaves_form_untouched() {
        let mut form = EmployeeForm::for_employee(&stored());
        FormInput::default().apply(&mut form, today()).unwrap();
        assert_eq!(form, EmployeeForm::for_employee(&stored()));
    }
}
