//! `validate_calendar` CLI -- validate calendar overlay JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Validate one file
//! validate_calendar shared/calendar.json
//!
//! # Validate every *.json file directly inside a directory
//! validate_calendar shared/
//!
//! # Several targets share one combined report
//! validate_calendar file1.json file2.json
//!
//! # Skip datetime consistency and overlap checks
//! validate_calendar --no-strict shared/
//!
//! # Diagnostics on stderr
//! RUST_LOG=calendar_validator=debug validate_calendar shared/
//! ```
//!
//! Exits 0 when no errors were found across all targets, 1 otherwise.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use calendar_validator::{CalendarValidator, ValidationReport, ValidatorOptions};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

const CHECKS: &str = "\
Validation checks:
  ✓ JSON syntax and structure
  ✓ Required fields present
  ✓ Date/time formats (ISO 8601)
  ✓ Time ranges (end after start)
  ✓ No overlapping events (same day, strict mode only)
  ✓ Datetime consistency (strict mode only)";

#[derive(Parser)]
#[command(
    name = "validate_calendar",
    version,
    about = "Validates calendar JSON files against the calendar schema and business rules",
    after_help = CHECKS
)]
struct Cli {
    /// Calendar JSON files or directories to validate
    #[arg(value_name = "FILE_OR_DIRECTORY")]
    targets: Vec<PathBuf>,

    /// Disable strict validation (skip datetime consistency and overlap checks)
    #[arg(long)]
    no_strict: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Help wins over everything else on the command line, unknown flags included.
    if env::args_os().skip(1).any(|arg| arg == "--help" || arg == "-h") {
        return match print_usage() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Fatal error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let cli = Cli::parse();

    if cli.targets.is_empty() {
        if let Err(err) = print_usage() {
            eprintln!("Fatal error: {err}");
        }
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Fatal error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Validate every target and print the combined report. Returns overall validity.
fn run(cli: Cli) -> Result<bool> {
    let options = ValidatorOptions {
        strict: !cli.no_strict,
    };
    let mut validator = CalendarValidator::new(options);

    for target in &cli.targets {
        validator.validate(target);
    }

    let report = validator.report();
    let stdout = io::stdout();
    print_report(&mut stdout.lock(), &report).context("Failed to write report")?;

    Ok(report.valid)
}

fn print_usage() -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", Cli::command().render_help())?;
    out.flush()
}

fn print_report(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    if !report.warnings.is_empty() {
        writeln!(out, "\nWarnings:")?;
        for warning in &report.warnings {
            writeln!(out, "  ⚠ {warning}")?;
        }
    }

    if !report.errors.is_empty() {
        writeln!(out, "\nErrors:")?;
        for error in &report.errors {
            writeln!(out, "  ✗ {error}")?;
        }
    }

    writeln!(out, "\nSummary:")?;
    writeln!(out, "  Files processed: {}", report.files_processed)?;
    writeln!(out, "  Files valid: {}", report.files_valid)?;
    writeln!(out, "  Total errors: {}", report.errors.len())?;
    writeln!(out, "  Total warnings: {}", report.warnings.len())?;
    out.flush()
}
