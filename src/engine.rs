use crate::error::SummaryError;
use crate::options::SummaryOptions;
use crate::preview::preview_file;
use crate::types::{DirectoryEntry, FileEntry, ScanResult};
use chrono::Utc;
use ignore::{DirEntry, WalkBuilder};
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &SummaryOptions) -> Result<Self, SummaryError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .require_git(false)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let excluded: HashSet<OsString> = options.exclude_dirs.iter().map(OsString::from).collect();
        let matcher = build_matcher(&options.ignore_patterns)?;
        let root = options.root.clone();
        builder.filter_entry(move |entry| {
            if is_dir(entry) && excluded.contains(entry.file_name()) {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping excluded directory {}", entry.path().display());
                return false;
            }
            match &matcher {
                Some(matcher) => !matcher.is_match(entry.path().strip_prefix(&root).unwrap_or(entry.path())),
                None => true,
            }
        });
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn into_iter(self) -> impl Iterator<Item = Result<DirEntry, ignore::Error>> {
        self.inner
    }
}
fn build_matcher(patterns: &[String]) -> Result<Option<globset::GlobSet>, SummaryError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut glob_builder = globset::GlobSetBuilder::new();
    for pattern in patterns {
        let glob = globset::Glob::new(pattern).map_err(|e| {
            SummaryError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
        })?;
        glob_builder.add(glob);
    }
    glob_builder
        .build()
        .map(Some)
        .map_err(|e| SummaryError::Walk(format!("Failed to build glob set: {}", e)))
}
fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}
/// Path of the entry a walk error is about, if it names one.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
/// Lexically resolves `.` and `..` without touching symlinks.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    if relative.as_os_str().is_empty() {
        return ".".to_string();
    }
    // Names that are not valid UTF-8 are stored lossily and may collide.
    if relative.to_str().is_none() {
        #[cfg(feature = "logging")]
        tracing::debug!("Non UTF-8 path stored lossily: {}", relative.display());
    }
    relative.to_string_lossy().into_owned()
}
fn file_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Size unavailable for {}: {}", path.display(), _e);
            0
        }
    }
}
fn parent_of(path: &Path) -> &Path {
    path.parent().unwrap_or(path)
}
fn file_entry(path: &Path, options: &SummaryOptions) -> FileEntry {
    FileEntry {
        path: relative_display(&options.root, path),
        size_bytes: file_size(path),
        preview: preview_file(path, options.preview_lines, options.binary_detection),
    }
}
/// Walks `options.root` and builds a [`ScanResult`].
///
/// Directories named in `exclude_dirs` are pruned during descent, as is any
/// entry whose root-relative path matches one of `ignore_patterns`. Failures
/// to read or size an individual file are absorbed into the entry; failures to
/// walk the tree are returned.
pub fn summarize(options: SummaryOptions) -> Result<ScanResult, SummaryError> {
    let generated_at = Utc::now();
    if !options.root.is_dir() {
        return Err(SummaryError::InvalidPath(format!(
            "{} is not a directory",
            options.root.display()
        )));
    }
    let root = std::path::absolute(&options.root)
        .map(|path| normalize(&path))
        .map_err(|e| SummaryError::io(&options.root, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!("Starting scan with root: {}", root.display());
    let mut directories: Vec<DirectoryEntry> = Vec::new();
    let mut positions: HashMap<PathBuf, usize> = HashMap::new();
    for entry in Walker::new(&options)?.into_iter() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // A link that cannot be resolved is still a file of its directory.
                match error_path(&err) {
                    Some(path) if !path.is_dir() && positions.contains_key(parent_of(path)) => {
                        #[cfg(feature = "logging")]
                        tracing::debug!("Unresolvable entry {}: {}", path.display(), err);
                        let position = positions[parent_of(path)];
                        directories[position].files.push(file_entry(path, &options));
                        continue;
                    }
                    _ => return Err(SummaryError::Walk(err.to_string())),
                }
            }
        };
        let path = entry.path();
        if is_dir(&entry) {
            positions.insert(path.to_path_buf(), directories.len());
            directories.push(DirectoryEntry {
                path: relative_display(&options.root, path),
                files: Vec::new(),
            });
            continue;
        }
        if path.is_dir() {
            #[cfg(feature = "logging")]
            tracing::debug!("Not following directory link {}", path.display());
            continue;
        }
        let position = path
            .parent()
            .and_then(|parent| positions.get(parent))
            .copied()
            .ok_or_else(|| {
                SummaryError::InvalidPath(format!("{} has no visited parent", path.display()))
            })?;
        directories[position].files.push(file_entry(path, &options));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Scan finished: {} directories", directories.len());
    Ok(ScanResult {
        generated_at,
        root: root.display().to_string(),
        directories,
    })
}
