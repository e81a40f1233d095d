//! # calendar-validator
//!
//! Structural and temporal validation for calendar overlay JSON files.
//!
//! A calendar document carries a `version` tag, a `savedAt` timestamp and a
//! list of events, each with a date, a start/end wall-clock time and the
//! combined start/end datetimes. The validator checks the document shape,
//! every event's date/time grammar, that each event ends after it starts,
//! and (in strict mode) that the combined datetimes agree with their parts
//! and that no two events on the same date overlap.
//!
//! ## Quick start
//!
//! ```no_run
//! use calendar_validator::{CalendarValidator, ValidatorOptions};
//!
//! let mut validator = CalendarValidator::new(ValidatorOptions::default());
//! let report = validator.validate("calendars/");
//! if !report.valid {
//!     for error in &report.errors {
//!         eprintln!("{error}");
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`grammar`] -- Date, Time and DateTime grammars with calendar/range checks
//! - [`schema`] -- Top-level document shape checks
//! - [`event`] -- Per-event field, format and consistency checks
//! - [`overlap`] -- Same-date interval overlap detection
//! - [`report`] -- Validation report and per-file diagnostics
//! - [`validator`] -- File/directory dispatch and result aggregation
//! - [`overlay`] -- Translation into the desktop overlay's event records
//! - [`error`] -- Error types

pub mod error;
pub mod event;
pub mod grammar;
pub mod overlap;
pub mod overlay;
pub mod report;
pub mod schema;
pub mod validator;

pub use error::{LoadError, OverlayError};
pub use event::{validate_event, EventRecord};
pub use overlap::{find_overlaps, Overlap};
pub use overlay::{to_overlay_events, OverlayEvent};
pub use report::ValidationReport;
pub use validator::{CalendarValidator, ValidatorOptions};
