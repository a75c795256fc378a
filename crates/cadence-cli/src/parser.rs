use std::collections::BTreeSet;

use anyhow::Result;
use chrono::Utc;
use chrono_english::{parse_date_string, Dialect};

use cadence_core::rule::{NthWeekdaySpec, RuleConfig, WeekOrdinal, DATE_FORMAT};

use crate::cli::RuleArgs;

/// Normalizes a user-supplied date into the engine's wire format.
///
/// Anything chrono-english cannot read passes through unchanged, so the
/// engine's validator reports it against the right form field instead of
/// the CLI inventing its own date errors.
pub fn normalize_date_input(input: &str, dialect: Dialect) -> String {
    match parse_date_string(input, Utc::now(), dialect) {
        Ok(resolved) => resolved.date_naive().format(DATE_FORMAT).to_string(),
        Err(_) => input.to_string(),
    }
}

pub fn parse_weekday(token: &str) -> Result<u8> {
    let index = match token.to_lowercase().as_str() {
        "sun" | "sunday" | "0" => 0,
        "mon" | "monday" | "1" => 1,
        "tue" | "tues" | "tuesday" | "2" => 2,
        "wed" | "wednesday" | "3" => 3,
        "thu" | "thur" | "thursday" | "4" => 4,
        "fri" | "friday" | "5" => 5,
        "sat" | "saturday" | "6" => 6,
        _ => anyhow::bail!("Unknown weekday: '{}'", token),
    };
    Ok(index)
}

pub fn parse_weekday_list(input: &str) -> Result<BTreeSet<u8>> {
    input
        .split(',')
        .map(|token| parse_weekday(token.trim()))
        .collect()
}

/// Parses an "nth weekday" phrase such as 'last friday' or '2nd tue'.
pub fn parse_nth_spec(input: &str) -> Result<NthWeekdaySpec> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        anyhow::bail!(
            "Expected '<ordinal> <weekday>' (e.g. 'last friday'), got '{}'",
            input
        );
    }
    let ordinal: WeekOrdinal = tokens[0].parse()?;
    let weekday = parse_weekday(tokens[1])?;
    Ok(NthWeekdaySpec { ordinal, weekday })
}

/// Builds the engine's rule configuration from command-line flags.
pub fn build_rule_config(args: &RuleArgs, dialect: Dialect) -> Result<RuleConfig> {
    let weekdays = match &args.on {
        Some(list) => parse_weekday_list(list)?,
        None => BTreeSet::new(),
    };
    let nth_weekday = args.nth.as_deref().map(parse_nth_spec).transpose()?;

    let monthly_mode = args.by.to_mode();
    if monthly_mode == cadence_core::rule::MonthlyMode::NthWeekday && nth_weekday.is_none() {
        anyhow::bail!("--nth is required when --by nth is selected");
    }

    Ok(RuleConfig {
        start_date: normalize_date_input(&args.start, dialect),
        end_date: args
            .until
            .as_deref()
            .map(|raw| normalize_date_input(raw, dialect)),
        kind: args.every.map(|frequency| frequency.to_kind()),
        interval: args.interval,
        weekdays,
        monthly_mode,
        nth_weekday,
    })
}
