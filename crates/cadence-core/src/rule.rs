use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Date format accepted by the engine for rule date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How often a rule repeats.
///
/// There is no default: a configuration without a kind describes a single
/// occurrence on the start date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid recurrence kind: {0}")]
pub struct ParseRecurrenceKindError(String);

impl FromStr for RecurrenceKind {
    type Err = ParseRecurrenceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(RecurrenceKind::Daily),
            "weekly" => Ok(RecurrenceKind::Weekly),
            "monthly" => Ok(RecurrenceKind::Monthly),
            "yearly" => Ok(RecurrenceKind::Yearly),
            _ => Err(ParseRecurrenceKindError(s.to_string())),
        }
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceKind::Daily => write!(f, "daily"),
            RecurrenceKind::Weekly => write!(f, "weekly"),
            RecurrenceKind::Monthly => write!(f, "monthly"),
            RecurrenceKind::Yearly => write!(f, "yearly"),
        }
    }
}

/// How a monthly rule picks its day within each month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MonthlyMode {
    /// Repeat on the start date's day of the month.
    DayOfMonth,
    /// Repeat on the nth occurrence of a weekday, per [`NthWeekdaySpec`].
    NthWeekday,
}

impl Default for MonthlyMode {
    fn default() -> Self {
        MonthlyMode::DayOfMonth
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid monthly mode: {0}")]
pub struct ParseMonthlyModeError(String);

impl FromStr for MonthlyMode {
    type Err = ParseMonthlyModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "dayofmonth" => Ok(MonthlyMode::DayOfMonth),
            "nth" | "nthweekday" => Ok(MonthlyMode::NthWeekday),
            _ => Err(ParseMonthlyModeError(s.to_string())),
        }
    }
}

/// Which occurrence of a weekday inside a month an nth-weekday rule targets.
///
/// `Last` always resolves to the final occurrence of the weekday within the
/// month, whether the month holds four or five of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeekOrdinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekOrdinal {
    /// Builds an ordinal from its wire integer (1..=5, 5 meaning "last").
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(WeekOrdinal::First),
            2 => Some(WeekOrdinal::Second),
            3 => Some(WeekOrdinal::Third),
            4 => Some(WeekOrdinal::Fourth),
            5 => Some(WeekOrdinal::Last),
            _ => None,
        }
    }

    /// The wire integer for this ordinal (1..=5).
    pub fn index(&self) -> u8 {
        match self {
            WeekOrdinal::First => 1,
            WeekOrdinal::Second => 2,
            WeekOrdinal::Third => 3,
            WeekOrdinal::Fourth => 4,
            WeekOrdinal::Last => 5,
        }
    }

    /// Whole weeks to advance from the month's first matching weekday.
    pub(crate) fn weeks_from_first(&self) -> i64 {
        (self.index() - 1) as i64
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid week ordinal: {0}")]
pub struct ParseWeekOrdinalError(String);

impl FromStr for WeekOrdinal {
    type Err = ParseWeekOrdinalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "1st" | "1" => Ok(WeekOrdinal::First),
            "second" | "2nd" | "2" => Ok(WeekOrdinal::Second),
            "third" | "3rd" | "3" => Ok(WeekOrdinal::Third),
            "fourth" | "4th" | "4" => Ok(WeekOrdinal::Fourth),
            "last" | "5th" | "5" => Ok(WeekOrdinal::Last),
            _ => Err(ParseWeekOrdinalError(s.to_string())),
        }
    }
}

impl fmt::Display for WeekOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekOrdinal::First => write!(f, "first"),
            WeekOrdinal::Second => write!(f, "second"),
            WeekOrdinal::Third => write!(f, "third"),
            WeekOrdinal::Fourth => write!(f, "fourth"),
            WeekOrdinal::Last => write!(f, "last"),
        }
    }
}

/// "Nth weekday of the month" pattern, e.g. the second Tuesday or the last
/// Friday. Only meaningful under [`MonthlyMode::NthWeekday`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NthWeekdaySpec {
    pub ordinal: WeekOrdinal,
    /// Weekday index, 0 = Sunday through 6 = Saturday.
    pub weekday: u8,
}

/// A candidate rule configuration, rebuilt by the presentation layer on
/// every edit.
///
/// Date fields carry the raw text the caller supplied; interpreting them is
/// the engine's job, so unparseable input surfaces as a field-tagged
/// validation error rather than a construction failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    /// First occurrence candidate, in `%Y-%m-%d` form.
    pub start_date: String,
    /// Inclusive end bound; empty or absent means the rule is open-ended.
    pub end_date: Option<String>,
    /// Absent means a single occurrence on the start date.
    pub kind: Option<RecurrenceKind>,
    /// Stride in units of `kind`; must be at least 1.
    pub interval: u32,
    /// Selected weekdays (0 = Sunday .. 6 = Saturday), weekly rules only.
    pub weekdays: BTreeSet<u8>,
    pub monthly_mode: MonthlyMode,
    /// Required when `monthly_mode` is [`MonthlyMode::NthWeekday`].
    pub nth_weekday: Option<NthWeekdaySpec>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: None,
            kind: None,
            interval: 1,
            weekdays: BTreeSet::new(),
            monthly_mode: MonthlyMode::default(),
            nth_weekday: None,
        }
    }
}

impl RuleConfig {
    /// The end date input with blank form values treated as "no end date".
    pub(crate) fn end_input(&self) -> Option<&str> {
        self.end_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Parses a rule date field. Returns `None` for anything that is not a real
/// calendar date in `%Y-%m-%d` form.
pub(crate) fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Weekday index of a date under the engine's Sunday-first numbering.
pub(crate) fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
