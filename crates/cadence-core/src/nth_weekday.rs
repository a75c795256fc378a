use chrono::{Datelike, Duration, NaiveDate};

use crate::rule::{weekday_index, NthWeekdaySpec, WeekOrdinal};

/// Resolves the date of "the nth `weekday`" within the given month.
///
/// The first four ordinals advance whole weeks from the month's first
/// matching weekday; their latest possible landing day is the 28th, so they
/// always stay inside the month. [`WeekOrdinal::Last`] advances four weeks
/// and steps back one week if that overshoots the month, which yields the
/// final occurrence of the weekday whether the month holds four or five of
/// them.
///
/// Returns `None` only for out-of-domain input: a weekday index above 6 or
/// a year/month pair that does not name a real month.
pub fn resolve_nth_weekday(year: i32, month: u32, spec: NthWeekdaySpec) -> Option<NaiveDate> {
    if spec.weekday > 6 {
        return None;
    }
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;

    let offset = (7 + spec.weekday as i64 - weekday_index(first_of_month) as i64) % 7;
    let first_match = first_of_month + Duration::days(offset);

    let candidate = first_match + Duration::days(7 * spec.ordinal.weeks_from_first());
    if spec.ordinal == WeekOrdinal::Last && candidate.month() != month {
        return Some(candidate - Duration::days(7));
    }
    Some(candidate)
}
