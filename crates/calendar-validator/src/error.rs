//! Error types for loading calendar files and translating validated events.

use std::path::PathBuf;

use thiserror::Error;

/// A calendar file that could not be turned into a JSON tree.
///
/// The `Display` output is the exact line recorded in the validation report.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content was not valid JSON.
    #[error("{}: Invalid JSON - {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while translating validated events into overlay records.
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The document does not have the shape a validated document has.
    #[error("Event {index}: {message}")]
    Malformed { index: usize, message: String },

    /// The local time does not exist in the target timezone (DST gap).
    #[error("Event {index}: {datetime} does not exist in {timezone}")]
    NonexistentLocalTime {
        index: usize,
        datetime: String,
        timezone: String,
    },
}

pub type Result<T, E = OverlayError> = std::result::Result<T, E>;
