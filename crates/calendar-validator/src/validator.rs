//! File and directory validation with cumulative reporting.
//!
//! A [`CalendarValidator`] accumulates errors and warnings across every
//! `validate` call made on it, so validating several targets one after the
//! other yields one combined report. Files are processed strictly one at a
//! time; each file's diagnostics are buffered and attributed to the file
//! path once its pipeline completes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoadError;
use crate::event::validate_event;
use crate::grammar;
use crate::overlap::find_overlaps;
use crate::report::{Diagnostics, ValidationReport};
use crate::schema::{validate_schema, EXPECTED_VERSION};

/// Validation profile, fixed when the validator is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Also require consistent `startDateTime`/`endDateTime` fields and
    /// non-overlapping events on the same date.
    pub strict: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Validates calendar JSON files and accumulates the results.
#[derive(Debug, Default)]
pub struct CalendarValidator {
    options: ValidatorOptions,
    errors: Vec<String>,
    warnings: Vec<String>,
    files_processed: usize,
    files_valid: usize,
}

impl CalendarValidator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Validate a single file or every `*.json` entry directly inside a
    /// directory, and return the cumulative report.
    ///
    /// Files are validated regardless of extension. Directory entries are
    /// matched case-insensitively on `.json`, visited in file-name order,
    /// and subdirectories are not descended into.
    ///
    /// Every file that passes with zero errors is announced on stdout as
    /// `✓ <path> - Valid`.
    pub fn validate(&mut self, target: impl AsRef<Path>) -> ValidationReport {
        let target = target.as_ref();
        tracing::debug!(path = %target.display(), "validating target");

        match fs::metadata(target) {
            Ok(meta) if meta.is_dir() => self.validate_directory(target),
            Ok(meta) if meta.is_file() => self.validate_file(target),
            Ok(_) => self.errors.push(format!(
                "Invalid target: {} is not a file or directory",
                target.display()
            )),
            Err(err) => self
                .errors
                .push(format!("Error accessing {}: {err}", target.display())),
        }

        tracing::info!(
            path = %target.display(),
            files_processed = self.files_processed,
            files_valid = self.files_valid,
            errors = self.errors.len(),
            "target validated"
        );
        self.report()
    }

    /// Snapshot of everything validated so far on this instance.
    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            valid: self.errors.is_empty(),
            files_processed: self.files_processed,
            files_valid: self.files_valid,
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
        }
    }

    /// Run the schema, event, overlap, `savedAt` and version checks on an
    /// already-parsed document. Messages are not attributed to any file.
    pub fn check_document(&self, document: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        if !validate_schema(document, &mut diagnostics) {
            return diagnostics;
        }

        let strict = self.options.strict;
        let events = document["events"].as_array().map(Vec::as_slice).unwrap_or_default();

        let mut records = Vec::with_capacity(events.len());
        let mut all_valid = true;
        for (index, event) in events.iter().enumerate() {
            match validate_event(event, index, strict, &mut diagnostics) {
                Some(record) => records.push(record),
                None => all_valid = false,
            }
        }

        if all_valid && strict {
            for overlap in find_overlaps(&records) {
                diagnostics.error(format!("Overlapping events: {overlap}"));
            }
        }

        if let Some(saved_at) = document["savedAt"].as_str() {
            if !grammar::is_valid_datetime(saved_at) {
                diagnostics.error(format!(
                    "Invalid savedAt format: {saved_at}. Expected YYYY-MM-DDTHH:MM:SS"
                ));
            }
        }

        if let Some(version) = document["version"].as_str() {
            if version != EXPECTED_VERSION {
                diagnostics.warning(format!(
                    "Unexpected version: {version}. Expected \"{EXPECTED_VERSION}\""
                ));
            }
        }

        diagnostics
    }

    fn validate_directory(&mut self, dir: &Path) {
        let files = match json_files_in(dir) {
            Ok(files) => files,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "cannot list directory");
                self.errors
                    .push(format!("Error reading directory {}: {err}", dir.display()));
                return;
            }
        };

        for path in files {
            self.validate_file(&path);
        }
    }

    fn validate_file(&mut self, path: &Path) {
        self.files_processed += 1;

        let document = match load_document(path) {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(error = %err, "cannot load calendar file");
                self.errors.push(err.to_string());
                return;
            }
        };

        let diagnostics = self.check_document(&document);
        let passed = !diagnostics.has_errors();
        let shown = path.display().to_string();
        let (errors, warnings) = diagnostics.prefixed(&shown);

        tracing::debug!(
            file = %shown,
            errors = errors.len(),
            warnings = warnings.len(),
            "file validated"
        );

        if passed {
            self.files_valid += 1;
            println!("✓ {shown} - Valid");
        }
        self.errors.extend(errors);
        self.warnings.extend(warnings);
    }
}

/// Read and parse a calendar file into a generic JSON tree.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Direct children of `dir` whose name ends in `.json` (any case), sorted.
fn json_files_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().to_lowercase().ends_with(".json") {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
