pub mod check;
pub mod preview;

use cadence_core::error::ValidationError;
use owo_colors::OwoColorize;

/// Prints each validation error tagged with the form field it belongs to,
/// matching how a form would place the messages next to their controls.
pub(crate) fn print_validation_errors(errors: &[ValidationError]) {
    for error in errors {
        eprintln!("  {} {}", format!("[{}]", error.field()).yellow(), error);
    }
}
