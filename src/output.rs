//! Output formatting for scan results.
//!
//! Provides functions to render a [`ScanResult`] as a JSON document or a
//! Markdown report. Preview text is copied verbatim into both.

use crate::{ScanResult, SummaryError};
use std::fs;
use std::path::Path;

/// Default file name of the JSON document.
pub const SUMMARY_JSON: &str = "project_summary.json";
/// Default file name of the Markdown report.
pub const SUMMARY_MD: &str = "project_summary.md";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    /// Returns the file name this format is written to by default.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => SUMMARY_MD,
            OutputFormat::Json => SUMMARY_JSON,
        }
    }
}

/// Formats the scan result into a string.
///
/// `pretty` only affects JSON, which is indented by two spaces when set.
pub fn format_result(
    result: &ScanResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, SummaryError> {
    match format {
        OutputFormat::Markdown => Ok(format_markdown(result)),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file, replacing any existing one.
pub fn write_result_to_file(
    result: &ScanResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), SummaryError> {
    let content = format_result(result, format, pretty)?;
    fs::write(&path, content).map_err(|e| SummaryError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_markdown(result: &ScanResult) -> String {
    let mut blocks = Vec::with_capacity(2 + result.directories.len());
    blocks.push("# Project Structure and Summary".to_string());
    blocks.push(format!("_Generated on {}_\n", result.generated_at_iso()));

    for dir in &result.directories {
        blocks.push(format!("\n## Directory: `{}`\n", dir.path));
        for file in &dir.files {
            blocks.push(format!(
                "### File: `{}` ({} bytes)\n",
                file.path, file.size_bytes
            ));
            blocks.push(format!("```text\n{}\n```\n", file.preview.as_str()));
        }
    }
    blocks.join("\n")
}

fn format_json(result: &ScanResult, pretty: bool) -> Result<String, SummaryError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
