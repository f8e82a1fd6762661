//! `cwy batch` — analyze every graph document in a directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use crate::cmd::analyze::{analyze_file, render_report_human};
use crate::output::{CliError, OutputMode, render, render_error};

/// Arguments for `cwy batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory containing graph documents.
    pub dir: PathBuf,
}

/// Execute `cwy batch`.
///
/// Documents are processed in sorted path order so runs are reproducible
/// regardless of directory enumeration order. A document that fails to load
/// is reported and skipped; the batch keeps going.
///
/// # Errors
///
/// Fails only if the directory itself cannot be read.
pub fn run_batch(args: &BatchArgs, output: OutputMode, quiet: bool) -> Result<()> {
    let entries = fs::read_dir(&args.dir)
        .with_context(|| format!("read dataset directory {}", args.dir.display()))?;

    let mut documents: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    documents.sort();

    if documents.is_empty() {
        render_error(
            output,
            &CliError::with_suggestion(
                format!("no graph documents in {}", args.dir.display()),
                "run `cwy generate` to create a dataset directory",
            ),
        )?;
        return Ok(());
    }

    for path in &documents {
        if !quiet && !output.is_json() {
            println!();
            println!("{:=<60}", "");
            println!("RUNNING: {}", path.display());
            println!("{:=<60}", "");
        }

        match analyze_file(path) {
            Ok(report) => render(output, &report, render_report_human)?,
            Err(error) => {
                warn!(path = %path.display(), error = %error, "document failed");
                render_error(
                    output,
                    &CliError {
                        message: format!("{}: {error:#}", path.display()),
                        suggestion: None,
                    },
                )?;
            }
        }
    }

    Ok(())
}
