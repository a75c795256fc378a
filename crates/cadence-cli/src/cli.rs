use clap::{Parser, Subcommand, ValueEnum};

use cadence_core::rule::{MonthlyMode, RecurrenceKind};

/// Preview and validate recurrence rules from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the dates a rule produces
    Preview(PreviewCommand),
    /// Validate a rule without previewing it
    Check(CheckCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    #[clap(flatten)]
    pub rule: RuleArgs,
    /// Maximum number of rows to display
    #[clap(long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    #[clap(flatten)]
    pub rule: RuleArgs,
}

/// Flags describing a recurrence rule
#[derive(Parser, Debug, Clone)]
pub struct RuleArgs {
    /// Start date of the schedule (e.g. '2024-01-01', 'next monday')
    #[clap(short, long)]
    pub start: String,

    /// End date of the recurrence (inclusive)
    #[clap(short, long)]
    pub until: Option<String>,

    /// How often the rule repeats; omit for a single occurrence
    #[clap(long, value_enum)]
    pub every: Option<Frequency>,

    /// Stride between occurrences, in units of the frequency
    #[clap(long, default_value_t = 1)]
    pub interval: u32,

    /// Days of week for weekly recurrence (e.g. 'mon,wed,fri')
    #[clap(long)]
    pub on: Option<String>,

    /// How monthly rules pick their day
    #[clap(long, value_enum, default_value_t = MonthlyPattern::Day)]
    pub by: MonthlyPattern,

    /// Nth weekday for monthly rules (e.g. 'last friday', '2nd tue')
    #[clap(long)]
    pub nth: Option<String>,
}

/// Human-friendly recurrence frequencies
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    /// Every day
    Daily,
    /// Every week
    Weekly,
    /// Every month
    Monthly,
    /// Every year
    Yearly,
}

impl Frequency {
    pub fn to_kind(self) -> RecurrenceKind {
        match self {
            Frequency::Daily => RecurrenceKind::Daily,
            Frequency::Weekly => RecurrenceKind::Weekly,
            Frequency::Monthly => RecurrenceKind::Monthly,
            Frequency::Yearly => RecurrenceKind::Yearly,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Yearly => write!(f, "yearly"),
        }
    }
}

/// Day selection strategy for monthly rules
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyPattern {
    /// Repeat on the start date's day of the month
    Day,
    /// Repeat on the nth weekday given by --nth
    Nth,
}

impl MonthlyPattern {
    pub fn to_mode(self) -> MonthlyMode {
        match self {
            MonthlyPattern::Day => MonthlyMode::DayOfMonth,
            MonthlyPattern::Nth => MonthlyMode::NthWeekday,
        }
    }
}

impl std::fmt::Display for MonthlyPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthlyPattern::Day => write!(f, "day"),
            MonthlyPattern::Nth => write!(f, "nth"),
        }
    }
}
