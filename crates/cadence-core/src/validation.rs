use crate::error::ValidationError;
use crate::rule::{parse_date, RecurrenceKind, RuleConfig};

/// Checks a rule configuration for internal consistency.
///
/// Every applicable violation is collected in one pass; there is no
/// short-circuit after the first finding, except that the date-range check
/// is skipped while either date fails to parse (a range comparison is
/// meaningless without two real dates). The returned list is duplicate-free
/// by construction.
///
/// An empty result is the precondition for [`crate::occurrence::generate`];
/// callers must treat a non-empty result as "no preview available".
pub fn validate(config: &RuleConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let start = parse_date(&config.start_date);
    if start.is_none() {
        errors.push(ValidationError::InvalidStartDate);
    }

    if let Some(raw_end) = config.end_input() {
        match (parse_date(raw_end), start) {
            (None, _) => errors.push(ValidationError::InvalidEndDate),
            (Some(end), Some(start)) if end < start => {
                errors.push(ValidationError::InvalidRange);
            }
            _ => {}
        }
    }

    if config.interval < 1 {
        errors.push(ValidationError::InvalidInterval);
    }

    if config.kind == Some(RecurrenceKind::Weekly) {
        if config.weekdays.is_empty() {
            errors.push(ValidationError::MissingWeekdaySelection);
        } else if config.weekdays.iter().any(|&day| day > 6) {
            errors.push(ValidationError::InvalidWeekdayValue);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleField;
    use std::collections::BTreeSet;

    fn valid_config() -> RuleConfig {
        RuleConfig {
            start_date: "2024-01-01".to_string(),
            end_date: Some("2024-06-30".to_string()),
            kind: Some(RecurrenceKind::Daily),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config_has_no_errors() {
        assert!(validate(&valid_config()).is_empty());
    }

    #[test]
    fn test_invalid_start_date() {
        let mut config = valid_config();
        config.start_date = "not-a-date".to_string();
        let errors = validate(&config);
        assert_eq!(errors, vec![ValidationError::InvalidStartDate]);
        assert_eq!(errors[0].field(), RuleField::StartDate);
    }

    #[test]
    fn test_unparseable_end_date_reports_end_date_field() {
        let mut config = valid_config();
        config.end_date = Some("2024-13-99".to_string());
        assert_eq!(validate(&config), vec![ValidationError::InvalidEndDate]);
    }

    #[test]
    fn test_end_before_start_reports_date_range() {
        let mut config = valid_config();
        config.start_date = "2024-05-10".to_string();
        config.end_date = Some("2024-05-01".to_string());
        let errors = validate(&config);
        assert_eq!(errors, vec![ValidationError::InvalidRange]);
        assert_eq!(errors[0].field(), RuleField::DateRange);
    }

    #[test]
    fn test_range_check_skipped_when_start_is_invalid() {
        let mut config = valid_config();
        config.start_date = "garbage".to_string();
        config.end_date = Some("2024-01-01".to_string());
        // Only the start date error: the end parses and no range comparison
        // is possible.
        assert_eq!(validate(&config), vec![ValidationError::InvalidStartDate]);
    }

    #[test]
    fn test_end_equal_to_start_is_valid() {
        let mut config = valid_config();
        config.end_date = Some(config.start_date.clone());
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_blank_end_date_is_treated_as_open_ended() {
        let mut config = valid_config();
        config.end_date = Some("   ".to_string());
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_zero_interval() {
        let mut config = valid_config();
        config.interval = 0;
        let errors = validate(&config);
        assert_eq!(errors, vec![ValidationError::InvalidInterval]);
        assert_eq!(errors[0].field(), RuleField::Interval);
    }

    #[test]
    fn test_weekly_without_weekdays() {
        let mut config = valid_config();
        config.kind = Some(RecurrenceKind::Weekly);
        config.weekdays = BTreeSet::new();
        let errors = validate(&config);
        assert_eq!(errors, vec![ValidationError::MissingWeekdaySelection]);
        assert_eq!(errors[0].field(), RuleField::SelectedDays);
    }

    #[test]
    fn test_weekday_selection_only_required_for_weekly() {
        let mut config = valid_config();
        config.kind = Some(RecurrenceKind::Monthly);
        config.weekdays = BTreeSet::new();
        assert!(validate(&config).is_empty());

        config.kind = None;
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_weekday_out_of_range() {
        let mut config = valid_config();
        config.kind = Some(RecurrenceKind::Weekly);
        config.weekdays = [1, 9].into_iter().collect();
        assert_eq!(validate(&config), vec![ValidationError::InvalidWeekdayValue]);
    }

    #[test]
    fn test_multiple_errors_are_all_reported() {
        let config = RuleConfig {
            start_date: "bogus".to_string(),
            end_date: Some("also bogus".to_string()),
            kind: Some(RecurrenceKind::Weekly),
            interval: 0,
            ..Default::default()
        };
        let errors = validate(&config);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::InvalidStartDate));
        assert!(errors.contains(&ValidationError::InvalidEndDate));
        assert!(errors.contains(&ValidationError::InvalidInterval));
        assert!(errors.contains(&ValidationError::MissingWeekdaySelection));
    }
}
