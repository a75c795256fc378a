use chrono::{Datelike, Local, NaiveDate};
use chrono_humanize::HumanTime;
use comfy_table::{Cell, Color, Row, Table};
use owo_colors::OwoColorize;

use cadence_core::rule::DATE_FORMAT;

/// Renders the occurrence preview as a table with a summary line, showing
/// at most `limit` rows.
pub fn display_occurrences(dates: &[NaiveDate], limit: usize) {
    if dates.is_empty() {
        println!("No occurrences fall within the rule's bounds.");
        return;
    }

    let today = Local::now().date_naive();

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Weekday", "When"]);

    for (index, date) in dates.iter().take(limit).enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new((index + 1).to_string()));

        let mut date_cell = Cell::new(date.format(DATE_FORMAT).to_string());
        if *date == today {
            date_cell = date_cell.fg(Color::Green);
        }
        row.add_cell(date_cell);

        row.add_cell(Cell::new(date.weekday().to_string()));
        row.add_cell(Cell::new(relative_to(*date, today)));
        table.add_row(row);
    }

    println!("{table}");

    let summary = format!("{} occurrence(s)", dates.len());
    if dates.len() > limit {
        println!("{} ({} shown)", summary.bold(), limit);
    } else {
        println!("{}", summary.bold());
    }
}

fn relative_to(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "today".to_string();
    }
    HumanTime::from(date.signed_duration_since(today)).to_string()
}
