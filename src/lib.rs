//! # project-summary
//!
//! `project_summary` walks a project directory and records, for every visited
//! directory, the files directly inside it together with their size and the
//! first few lines of their content. The result can be written out as a JSON
//! document (for tools) and a Markdown report (for people).
//!
//! Scanning is a single synchronous pass. Files that cannot be previewed get a
//! placeholder instead of failing the run, and unreadable sizes become `0`.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use project_summary::{SummaryBuilder, summarize};
//! use project_summary::output::{OutputFormat, write_result_to_file};
//!
//! let options = SummaryBuilder::new(".")
//!     .preview_lines(5)
//!     .ignore_patterns(vec!["target".into()])
//!     .build();
//!
//! let result = summarize(options).expect("Failed to scan directory");
//!
//! for dir in &result.directories {
//!     println!("{}: {} files", dir.path, dir.files.len());
//! }
//! write_result_to_file(&result, OutputFormat::Markdown, "summary.md", false)
//!     .expect("Failed to write report");
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod preview;
mod types;

pub use engine::summarize;
pub use error::{PreviewError, SummaryError};
pub use options::{
    BinaryDetection, DEFAULT_EXCLUDED_DIRS, DEFAULT_PREVIEW_LINES, SummaryBuilder, SummaryOptions,
};
pub use preview::{preview_file, read_preview};
pub use types::{DirectoryEntry, FileEntry, PREVIEW_PLACEHOLDER, Preview, ScanResult};
