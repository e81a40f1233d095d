//! Validation results: the cumulative report and the per-file buffer.

use serde::{Deserialize, Serialize};

/// Cumulative outcome of every target validated through one validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// `true` iff `errors` is empty.
    pub valid: bool,
    pub files_processed: usize,
    pub files_valid: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Errors and warnings collected while one file goes through the pipeline.
///
/// Messages are stored unprefixed; [`Diagnostics::prefixed`] attributes
/// them to a file once the pipeline for that file has finished.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consume the buffer, returning `(errors, warnings)` with every
    /// message prefixed by `"<file>: "`.
    pub fn prefixed(self, file: &str) -> (Vec<String>, Vec<String>) {
        let prefix = |messages: Vec<String>| -> Vec<String> {
            messages
                .into_iter()
                .map(|message| format!("{file}: {message}"))
                .collect()
        };
        (prefix(self.errors), prefix(self.warnings))
    }
}
