/// CLI integration tests for cadence
///
/// These tests exercise the CLI as a black box: flag parsing, validation
/// failure paths with field-tagged messages, and preview output.
use predicates::prelude::*;

mod helpers;
use helpers::CliTestHarness;

#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("recurrence rules"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("cadence"));

    harness
        .run_failure(&["explode"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_preview_weekly_rule() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "preview",
            "--start", "2024-01-01",
            "--every", "weekly",
            "--on", "mon,wed",
            "--until", "2024-01-15",
        ])
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("2024-01-03"))
        .stdout(predicate::str::contains("2024-01-08"))
        .stdout(predicate::str::contains("2024-01-10"))
        .stdout(predicate::str::contains("2024-01-15"))
        .stdout(predicate::str::contains("5 occurrence"));
}

#[test]
fn test_preview_last_friday_of_month() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "preview",
            "--start", "2024-03-01",
            "--every", "monthly",
            "--by", "nth",
            "--nth", "last friday",
            "--until", "2024-05-31",
        ])
        .stdout(predicate::str::contains("2024-03-29"))
        .stdout(predicate::str::contains("2024-04-26"))
        .stdout(predicate::str::contains("2024-05-31"))
        .stdout(predicate::str::contains("3 occurrence"));
}

#[test]
fn test_preview_without_frequency_is_a_single_occurrence() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["preview", "--start", "2024-04-15"])
        .stdout(predicate::str::contains("2024-04-15"))
        .stdout(predicate::str::contains("1 occurrence"));
}

#[test]
fn test_invalid_interval_is_field_tagged() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&[
            "check",
            "--start", "2024-01-01",
            "--every", "daily",
            "--interval", "0",
        ])
        .stderr(predicate::str::contains("[interval]"))
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_inverted_date_range_suppresses_preview() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&[
            "preview",
            "--start", "2024-05-10",
            "--until", "2024-05-01",
            "--every", "daily",
        ])
        .stdout(predicate::str::contains("2024-05").not())
        .stderr(predicate::str::contains("[dateRange]"));
}

#[test]
fn test_weekly_without_days_is_rejected() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["check", "--start", "2024-01-01", "--every", "weekly"])
        .stderr(predicate::str::contains("[selectedDays]"));
}

#[test]
fn test_unparseable_start_date_is_reported_by_the_engine() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["check", "--start", "not-a-date", "--every", "daily"])
        .stderr(predicate::str::contains("[startDate]"));
}

#[test]
fn test_check_reports_valid_rule() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["check", "--start", "2024-01-01", "--every", "daily"])
        .stdout(predicate::str::contains("Rule is valid."));
}

#[test]
fn test_nth_flag_is_required_for_nth_mode() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&[
            "preview",
            "--start", "2024-03-01",
            "--every", "monthly",
            "--by", "nth",
        ])
        .stderr(predicate::str::contains("--nth"));
}

#[test]
fn test_unknown_weekday_name_is_rejected() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&[
            "preview",
            "--start", "2024-01-01",
            "--every", "weekly",
            "--on", "mon,blursday",
        ])
        .stderr(predicate::str::contains("blursday"));
}

#[test]
fn test_limit_flag_truncates_the_table() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "preview",
            "--start", "2024-01-01",
            "--every", "daily",
            "--until", "2024-12-31",
            "--limit", "5",
        ])
        .stdout(predicate::str::contains("366 occurrence"))
        .stdout(predicate::str::contains("(5 shown)"))
        .stdout(predicate::str::contains("2024-01-05"))
        .stdout(predicate::str::contains("2024-01-06").not());
}

#[test]
fn test_display_limit_comes_from_config_file() {
    let harness = CliTestHarness::new();
    harness.write_config("display_limit = 3\n");

    harness
        .run_success(&[
            "preview",
            "--start", "2024-01-01",
            "--every", "daily",
            "--until", "2024-01-31",
        ])
        .stdout(predicate::str::contains("31 occurrence"))
        .stdout(predicate::str::contains("(3 shown)"));
}
