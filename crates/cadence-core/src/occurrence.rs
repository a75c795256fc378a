use chrono::{Datelike, Duration, Months, NaiveDate};
use std::collections::BTreeSet;

use crate::nth_weekday::resolve_nth_weekday;
use crate::rule::{
    parse_date, weekday_index, MonthlyMode, NthWeekdaySpec, RecurrenceKind, RuleConfig,
};

/// Ceiling on emitted occurrences for rules without an end date. Engine
/// policy, not user-visible configuration.
const MAX_OCCURRENCES: usize = 365;

/// Produces the ordered, deduplicated occurrence dates a rule implies.
///
/// Precondition: [`crate::validation::validate`] returned no errors for
/// `config`. The function never panics and never returns an error; invoked
/// on an inconsistent configuration it degrades to the single-element
/// sequence holding the start date, or to an empty sequence when even the
/// start date cannot be interpreted.
///
/// Every returned date lies in `[start, end]` when an end date is present;
/// open-ended rules are cut off after an internal ceiling of occurrences.
pub fn generate(config: &RuleConfig) -> Vec<NaiveDate> {
    let start = match parse_date(&config.start_date) {
        Some(start) => start,
        None => return Vec::new(),
    };

    let end = match config.end_input() {
        Some(raw) => match parse_date(raw) {
            Some(end) if end >= start => Some(end),
            _ => return vec![start],
        },
        None => None,
    };

    let kind = match config.kind {
        Some(kind) => kind,
        None => return vec![start],
    };

    if config.interval < 1 {
        return vec![start];
    }

    let window = Window { start, end };
    let generated = match kind {
        RecurrenceKind::Daily => Some(daily(&window, config.interval)),
        RecurrenceKind::Weekly => weekly(&window, config.interval, &config.weekdays),
        RecurrenceKind::Monthly => match config.monthly_mode {
            MonthlyMode::DayOfMonth => Some(month_stride(&window, config.interval)),
            MonthlyMode::NthWeekday => config
                .nth_weekday
                .and_then(|spec| monthly_nth_weekday(&window, config.interval, spec)),
        },
        RecurrenceKind::Yearly => config
            .interval
            .checked_mul(12)
            .map(|months| month_stride(&window, months)),
    };

    let mut dates = match generated {
        Some(dates) => dates,
        None => return vec![start],
    };

    // The sorted, duplicate-free guarantee must hold regardless of walker
    // order.
    dates.sort_unstable();
    dates.dedup();
    if window.end.is_none() {
        dates.truncate(MAX_OCCURRENCES);
    }
    dates
}

/// Emission bounds for a single generation run.
#[derive(Debug, Clone, Copy)]
struct Window {
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl Window {
    fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }

    /// Whether the cursor has moved beyond the explicit end bound.
    fn past_end(&self, date: NaiveDate) -> bool {
        self.end.map_or(false, |end| date > end)
    }

    /// Whether an open-ended run has hit the internal ceiling.
    fn at_capacity(&self, emitted: usize) -> bool {
        self.end.is_none() && emitted >= MAX_OCCURRENCES
    }
}

fn daily(window: &Window, interval: u32) -> Vec<NaiveDate> {
    let step = Duration::days(interval as i64);
    let mut dates = Vec::new();
    let mut cursor = window.start;
    loop {
        if window.past_end(cursor) {
            break;
        }
        dates.push(cursor);
        if window.at_capacity(dates.len()) {
            break;
        }
        cursor = match cursor.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
    }
    dates
}

/// Weekly rules emit per week-window: the window opens on the Sunday of the
/// week containing the start date and advances `interval` weeks at a time;
/// inside a window the selected weekdays come out in ascending Sunday-first
/// order, so the overall sequence is chronological by construction.
///
/// Returns `None` when no usable weekday is selected, which a validated
/// configuration rules out.
fn weekly(window: &Window, interval: u32, weekdays: &BTreeSet<u8>) -> Option<Vec<NaiveDate>> {
    let selected: Vec<u8> = weekdays.iter().copied().filter(|&day| day <= 6).collect();
    if selected.is_empty() {
        return None;
    }

    let stride = Duration::days(7 * interval as i64);
    let mut week_start =
        window.start - Duration::days(weekday_index(window.start) as i64);
    let mut dates = Vec::new();
    loop {
        if window.past_end(week_start) {
            break;
        }
        for &day in &selected {
            let date = week_start + Duration::days(day as i64);
            if window.contains(date) {
                dates.push(date);
            }
        }
        if window.at_capacity(dates.len()) {
            break;
        }
        week_start = match week_start.checked_add_signed(stride) {
            Some(next) => next,
            None => break,
        };
    }
    Some(dates)
}

/// Walks months (or years, as 12-month strides) forward from the start
/// date. Each target is re-derived from the start date itself, so the
/// original day-of-month is preserved across shorter months instead of
/// decaying to an earlier clamp: Jan 31 yields Feb 29 and then Mar 31, not
/// Mar 29. `chrono` clamps to the last day of the month, which is the
/// documented policy for short months and for Feb 29 in common years.
fn month_stride(window: &Window, months_per_step: u32) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut step = 0u32;
    loop {
        let date = match step
            .checked_mul(months_per_step)
            .and_then(|span| window.start.checked_add_months(Months::new(span)))
        {
            Some(date) => date,
            None => break,
        };
        if window.past_end(date) {
            break;
        }
        dates.push(date);
        if window.at_capacity(dates.len()) {
            break;
        }
        step += 1;
    }
    dates
}

/// Monthly rules in nth-weekday mode resolve one candidate per
/// interval-stepped month, starting at the start date's month, and emit the
/// candidates that fall inside the window. Resolution is total over valid
/// specs; a `None` from the resolver aborts into the caller's fallback.
fn monthly_nth_weekday(
    window: &Window,
    interval: u32,
    spec: NthWeekdaySpec,
) -> Option<Vec<NaiveDate>> {
    let month_anchor = window.start.with_day(1)?;

    let mut dates = Vec::new();
    let mut step = 0u32;
    loop {
        let anchor = match step
            .checked_mul(interval)
            .and_then(|span| month_anchor.checked_add_months(Months::new(span)))
        {
            Some(anchor) => anchor,
            None => break,
        };
        // Once whole months open beyond the end bound nothing further can
        // be emitted.
        if window.past_end(anchor) {
            break;
        }
        let date = resolve_nth_weekday(anchor.year(), anchor.month(), spec)?;
        if window.contains(date) {
            dates.push(date);
        }
        if window.at_capacity(dates.len()) {
            break;
        }
        step += 1;
    }
    Some(dates)
}
