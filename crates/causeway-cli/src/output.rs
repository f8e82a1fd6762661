//! Shared output layer for human/JSON parity across CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its result
//! accordingly: sectioned text for humans, or stable serde JSON for
//! machines. Errors render to stderr in the same two shapes.

use std::io::{self, Write};

use serde::Serialize;

/// Shared width for human section separators.
pub const RULE_WIDTH: usize = 60;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-oriented sectioned text.
    Human,
    /// Machine-readable JSON (one object per result).
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Write a section heading followed by a separator rule.
///
/// # Errors
///
/// Propagates write failures.
pub fn section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    writeln!(w, "{:-<width$}", "", width = RULE_WIDTH)
}

/// Render `value` to stdout: JSON in [`OutputMode::Json`], otherwise the
/// provided human closure.
///
/// # Errors
///
/// Propagates serialization and write failures.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    human_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Human => {
            human_fn(value, &mut out)?;
        }
    }
    Ok(())
}

/// A structured CLI-boundary error.
#[derive(Debug, Serialize)]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl CliError {
    /// Build an error with a remediation suggestion.
    pub fn with_suggestion(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

/// Render an error to stderr in the requested format.
///
/// # Errors
///
/// Propagates serialization and write failures.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({ "error": error });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Human => {
            writeln!(out, "error: {}", error.message)?;
            if let Some(ref suggestion) = error.suggestion {
                writeln!(out, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}
