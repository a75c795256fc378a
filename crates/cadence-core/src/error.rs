use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Form field a [`ValidationError`] attaches to.
///
/// The presentation layer uses this tag to place each message next to the
/// control that produced it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RuleField {
    StartDate,
    EndDate,
    DateRange,
    Interval,
    SelectedDays,
}

impl RuleField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleField::StartDate => "startDate",
            RuleField::EndDate => "endDate",
            RuleField::DateRange => "dateRange",
            RuleField::Interval => "interval",
            RuleField::SelectedDays => "selectedDays",
        }
    }
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single consistency violation found in a rule configuration.
///
/// `validate` reports every applicable violation in one pass; a rule is
/// usable only when none are reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Start date is not a valid calendar date")]
    InvalidStartDate,

    #[error("End date is not a valid calendar date")]
    InvalidEndDate,

    #[error("End date must not be before the start date")]
    InvalidRange,

    #[error("Repeat interval must be at least 1")]
    InvalidInterval,

    #[error("Select at least one weekday for weekly recurrence")]
    MissingWeekdaySelection,

    #[error("Weekday values must be between 0 (Sunday) and 6 (Saturday)")]
    InvalidWeekdayValue,
}

impl ValidationError {
    /// The form field this error belongs to.
    pub fn field(&self) -> RuleField {
        match self {
            ValidationError::InvalidStartDate => RuleField::StartDate,
            ValidationError::InvalidEndDate => RuleField::EndDate,
            ValidationError::InvalidRange => RuleField::DateRange,
            ValidationError::InvalidInterval => RuleField::Interval,
            ValidationError::MissingWeekdaySelection => RuleField::SelectedDays,
            ValidationError::InvalidWeekdayValue => RuleField::SelectedDays,
        }
    }
}
