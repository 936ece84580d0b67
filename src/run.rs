//! Command execution.
//!
//! Results are written to any [`Write`] so the output can be captured in tests.

use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use datatype_check::config::{Mode, ValidatedConfig};
use datatype_check::eval::{Context, Verdict};
use datatype_check::rules::Registry;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to write results.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Failed to serialize a verdict.
    #[error("Failed to serialize verdict: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Tally of a `check` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of values that passed
    pub valid: usize,
    /// Number of values that failed
    pub invalid: usize,
}

impl Summary {
    /// Returns true if no value failed.
    #[must_use]
    pub const fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// One JSON output line.
#[derive(Serialize)]
struct Line<'a> {
    value: &'a str,
    #[serde(flatten)]
    verdict: &'a Verdict,
}

/// Executes the configured command.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn execute<W: Write>(config: &ValidatedConfig, out: &mut W) -> Result<Summary, RunError> {
    match &config.mode {
        Mode::Check { values, json } => check(config, values, *json, out),
        Mode::Explain => {
            explain(config, out)?;
            Ok(Summary::default())
        }
    }
}

fn check<W: Write>(
    config: &ValidatedConfig,
    values: &[String],
    json: bool,
    out: &mut W,
) -> Result<Summary, RunError> {
    let context = Context::new()
        .optional(config.optional)
        .field(&config.field)
        .siblings(&config.siblings);

    let mut summary = Summary::default();

    for value in values {
        let verdict = config.validator.validate(value, &context);

        if verdict.is_valid() {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }

        if json {
            serde_json::to_writer(&mut *out, &Line { value, verdict: &verdict })?;
            writeln!(out)?;
        } else {
            match verdict.message() {
                None => writeln!(out, "ok: {value}")?,
                Some(message) => writeln!(out, "invalid: {value}: {message}")?,
            }
        }
    }

    tracing::debug!(
        valid = summary.valid,
        invalid = summary.invalid,
        "Check finished"
    );
    Ok(summary)
}

fn explain<W: Write>(config: &ValidatedConfig, out: &mut W) -> io::Result<()> {
    let program = config.validator.program();

    writeln!(out, "datatype: {}", program.descriptor())?;
    writeln!(out, "compiled: {program}")?;
    writeln!(out, "field:    {} (optional: {})", config.field, config.optional)?;
    writeln!(out)?;
    write!(out, "{}", program.tree())
}

/// Writes the built-in rule names, one per line.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn list_rules<W: Write>(out: &mut W) -> io::Result<()> {
    for name in Registry::builtin().names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
