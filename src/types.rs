use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Text stored in place of a preview that could not be produced.
pub const PREVIEW_PLACEHOLDER: &str = "[Could not preview file]\n";

/// The outcome of previewing one file.
///
/// Serialized as a plain string; [`Preview::Unavailable`] becomes
/// [`PREVIEW_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Preview {
    /// The leading lines of the file, terminators included.
    Text(String),
    /// The file could not be opened, read, or looked binary.
    Unavailable,
}

impl Preview {
    pub fn as_str(&self) -> &str {
        match self {
            Preview::Text(text) => text,
            Preview::Unavailable => PREVIEW_PLACEHOLDER,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Preview::Text(_))
    }
}

impl From<Preview> for String {
    fn from(preview: Preview) -> Self {
        match preview {
            Preview::Text(text) => text,
            Preview::Unavailable => PREVIEW_PLACEHOLDER.to_string(),
        }
    }
}

impl From<String> for Preview {
    fn from(text: String) -> Self {
        if text == PREVIEW_PLACEHOLDER {
            Preview::Unavailable
        } else {
            Preview::Text(text)
        }
    }
}

/// A single file with its size and preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scan root.
    pub path: String,
    /// Size in bytes, or 0 if it could not be determined.
    pub size_bytes: u64,
    pub preview: Preview,
}

/// One visited directory and the files directly inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Path relative to the scan root; `"."` for the root itself.
    pub path: String,
    pub files: Vec<FileEntry>,
}

/// The complete result of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(with = "timestamp")]
    pub generated_at: DateTime<Utc>,
    /// Absolute path of the scan root.
    pub root: String,
    /// Directories in the order they were visited.
    pub directories: Vec<DirectoryEntry>,
}

impl ScanResult {
    /// The generation time as ISO-8601 UTC with microseconds and a `Z` suffix.
    pub fn generated_at_iso(&self) -> String {
        timestamp::format(&self.generated_at)
    }

    /// Iterates over every file in visitation order.
    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.directories.iter().flat_map(|dir| dir.files.iter())
    }
}

mod timestamp {
    use super::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    pub(super) fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(ts))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
