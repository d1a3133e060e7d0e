//! Command-line interface for project-summary.
//!
//! Scans a directory (the current one by default) and writes
//! `project_summary.json` and `project_summary.md` next to it.

use clap::Parser;
use project_summary::output::{self, OutputFormat, SUMMARY_JSON, SUMMARY_MD};
use project_summary::{ScanResult, SummaryBuilder, SummaryError, SummaryOptions, summarize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;
#[cfg(feature = "logging")]
use tracing_subscriber::EnvFilter;

/// Snapshot a project tree with file previews
#[derive(Parser)]
#[command(name = "project-summary", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Directory the JSON and Markdown files are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Also scan summary files left in the root by a previous run
    #[arg(long)]
    include_previous: bool,

    /// Log scan details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> SummaryOptions {
        let mut builder = SummaryBuilder::new(&self.root);
        if !self.include_previous && same_directory(&self.root, &self.output_dir) {
            builder = builder.ignore_patterns(vec![SUMMARY_JSON.into(), SUMMARY_MD.into()]);
        }
        builder.build()
    }
}

fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("project_summary=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);

    let json_path = cli.output_dir.join(OutputFormat::Json.default_file_name());
    let md_path = cli.output_dir.join(OutputFormat::Markdown.default_file_name());
    let options = cli.into_options();

    println!("Extracting project summary...");
    let result = match summarize(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Err(e) = write_outputs(&result, &json_path, &md_path) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!(
        "Summary written to {} and {}",
        md_path.display(),
        json_path.display()
    );
}

fn write_outputs(result: &ScanResult, json_path: &Path, md_path: &Path) -> Result<(), SummaryError> {
    output::write_result_to_file(result, OutputFormat::Json, json_path, true)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Wrote {}", json_path.display());
    output::write_result_to_file(result, OutputFormat::Markdown, md_path, false)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Wrote {}", md_path.display());
    Ok(())
}
