//! # Cadence Core Library
//!
//! A pure recurrence rule engine: it turns a rule description — frequency,
//! interval, optional end date, weekday selections, and "nth weekday of the
//! month" patterns — into a validation verdict and a bounded, ordered
//! sequence of occurrence dates.
//!
//! ## Features
//!
//! - **Field-Tagged Validation**: every consistency violation is reported
//!   against the form field that caused it, all in one pass
//! - **Bounded Generation**: explicit end dates bound the sequence; rules
//!   without one are cut off at an internal ceiling so generation always
//!   terminates
//! - **Nth-Weekday Resolution**: "second Tuesday" and "last Friday" patterns,
//!   including five-occurrence months
//! - **Total by Design**: generation never raises; inconsistent input
//!   degrades to a defined fallback sequence
//! - **Pure Functions**: no I/O and no shared state, so concurrent calls
//!   with distinct inputs need no locking
//!
//! ## Core Modules
//!
//! - [`rule`]: Rule configuration and its component types
//! - [`validation`]: Consistency checking with field-tagged errors
//! - [`occurrence`]: Occurrence sequence generation
//! - [`nth_weekday`]: Nth-weekday-of-month date resolution
//! - [`error`]: Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cadence_core::occurrence::generate;
//! use cadence_core::rule::{RecurrenceKind, RuleConfig};
//! use cadence_core::validation::validate;
//!
//! let config = RuleConfig {
//!     start_date: "2024-01-01".to_string(),
//!     end_date: Some("2024-01-15".to_string()),
//!     kind: Some(RecurrenceKind::Weekly),
//!     weekdays: [1, 3].into_iter().collect(), // Monday, Wednesday
//!     ..Default::default()
//! };
//!
//! let errors = validate(&config);
//! assert!(errors.is_empty());
//!
//! let dates = generate(&config);
//! assert_eq!(dates.len(), 5);
//! ```

pub mod error;
pub mod nth_weekday;
pub mod occurrence;
pub mod rule;
pub mod validation;
