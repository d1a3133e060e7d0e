use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// Number of leading lines captured for each file.
pub const DEFAULT_PREVIEW_LINES: usize = 10;
/// Directory names pruned wherever they occur in the tree.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 5] = [".git", "node_modules", "dist", "__pycache__", ".venv"];
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub root: PathBuf,
    pub preview_lines: usize,
    pub exclude_dirs: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub respect_gitignore: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub binary_detection: BinaryDetection,
}
impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            preview_lines: DEFAULT_PREVIEW_LINES,
            exclude_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            ignore_patterns: Vec::new(),
            respect_gitignore: false,
            follow_links: false,
            max_depth: None,
            binary_detection: BinaryDetection::Accurate,
        }
    }
}
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    options: SummaryOptions,
}
impl SummaryBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SummaryOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn preview_lines(mut self, lines: usize) -> Self {
        self.options.preview_lines = lines;
        self
    }
    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.options.exclude_dirs = names;
        self
    }
    /// Glob patterns matched against root-relative paths.
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> SummaryOptions {
        self.options
    }
}
