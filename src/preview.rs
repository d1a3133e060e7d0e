//! Best-effort reading of a file's leading lines.

use crate::error::PreviewError;
use crate::options::BinaryDetection;
use crate::types::Preview;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

const SNIFF_LEN: u64 = 4096;

/// Reads up to `lines` lines from `path`, keeping their `\n` terminators.
///
/// Invalid UTF-8 is replaced rather than rejected. A file whose first chunk is
/// classified as binary by `binary_detection` yields [`PreviewError::Binary`].
pub fn read_preview(
    path: &Path,
    lines: usize,
    binary_detection: BinaryDetection,
) -> Result<String, PreviewError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut first_chunk = Vec::with_capacity(SNIFF_LEN as usize);
    reader.by_ref().take(SNIFF_LEN).read_to_end(&mut first_chunk)?;
    let is_binary = match binary_detection {
        BinaryDetection::Simple => first_chunk.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&first_chunk).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        return Err(PreviewError::Binary);
    }
    let mut reader = first_chunk.as_slice().chain(reader);
    let mut buf = Vec::new();
    for _ in 0..lines {
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Like [`read_preview`], but folds every failure into [`Preview::Unavailable`].
pub fn preview_file(path: &Path, lines: usize, binary_detection: BinaryDetection) -> Preview {
    match read_preview(path, lines, binary_detection) {
        Ok(text) => Preview::Text(text),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("No preview for {}: {}", path.display(), _e);
            Preview::Unavailable
        }
    }
}
