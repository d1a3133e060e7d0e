use project_summary::{
    read_preview,
    preview_file,
    BinaryDetection,
    Preview,
    PreviewError,
    SummaryBuilder,
    DEFAULT_EXCLUDED_DIRS,
    PREVIEW_PLACEHOLDER,
};
use std::fs;
use tempfile::tempdir;
fn numbered_lines(count: usize) -> String {
    (1..=count).map(|i| format!("line {}\n", i)).collect()
}
#[test]
fn test_preview_takes_first_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("long.txt");
    fs::write(&path, numbered_lines(15)).unwrap();
    let preview = read_preview(&path, 10, BinaryDetection::Accurate).unwrap();
    assert_eq!(preview, numbered_lines(10));
    assert!(!preview.contains("line 11"));
}
#[test]
fn test_preview_short_file_is_whole_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "a\nb").unwrap();
    let preview = read_preview(&path, 10, BinaryDetection::Accurate).unwrap();
    assert_eq!(preview, "a\nb");
}
#[test]
fn test_preview_empty_file_and_zero_lines() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "").unwrap();
    assert_eq!(read_preview(&empty, 10, BinaryDetection::Accurate).unwrap(), "");
    let text = dir.path().join("text.txt");
    fs::write(&text, "hello\n").unwrap();
    assert_eq!(read_preview(&text, 0, BinaryDetection::Accurate).unwrap(), "");
}
#[test]
fn test_preview_keeps_crlf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dos.txt");
    fs::write(&path, "one\r\ntwo\r\nthree\r\n").unwrap();
    let preview = read_preview(&path, 2, BinaryDetection::Accurate).unwrap();
    assert_eq!(preview, "one\r\ntwo\r\n");
}
#[test]
fn test_preview_replaces_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9\nok\n").unwrap();
    let preview = read_preview(&path, 10, BinaryDetection::None).unwrap();
    assert_eq!(preview, "caf\u{FFFD}\nok\n");
}
#[test]
fn test_preview_beyond_sniff_chunk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.txt");
    let long_line = "x".repeat(5000);
    fs::write(&path, format!("{}\nsecond\nthird\n", long_line)).unwrap();
    let preview = read_preview(&path, 2, BinaryDetection::Accurate).unwrap();
    assert_eq!(preview, format!("{}\nsecond\n", long_line));
}
#[test]
fn test_binary_detection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bin.dat");
    fs::write(&path, vec![0, 1, 2, 3]).unwrap();
    assert!(matches!(
        read_preview(&path, 10, BinaryDetection::Simple),
        Err(PreviewError::Binary)
    ));
    assert!(matches!(
        read_preview(&path, 10, BinaryDetection::Accurate),
        Err(PreviewError::Binary)
    ));
    assert!(read_preview(&path, 10, BinaryDetection::None).is_ok());
    assert_eq!(
        preview_file(&path, 10, BinaryDetection::Accurate),
        Preview::Unavailable
    );
}
#[test]
fn test_missing_file_gets_placeholder() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    assert!(matches!(
        read_preview(&path, 10, BinaryDetection::Accurate),
        Err(PreviewError::Io(_))
    ));
    let preview = preview_file(&path, 10, BinaryDetection::Accurate);
    assert!(!preview.is_available());
    assert_eq!(preview.as_str(), "[Could not preview file]\n");
}
#[test]
fn test_preview_serializes_as_string() {
    let json = serde_json::to_string(&Preview::Unavailable).unwrap();
    assert_eq!(json, "\"[Could not preview file]\\n\"");
    let text: Preview = serde_json::from_str("\"fn main() {}\\n\"").unwrap();
    assert_eq!(text, Preview::Text("fn main() {}\n".to_string()));
    let placeholder: Preview = serde_json::from_str(&json).unwrap();
    assert_eq!(placeholder, Preview::Unavailable);
    assert_eq!(String::from(Preview::Unavailable), PREVIEW_PLACEHOLDER);
}
#[test]
fn test_builder_defaults() {
    let options = SummaryBuilder::new("project").build();
    assert_eq!(options.root, std::path::PathBuf::from("project"));
    assert_eq!(options.preview_lines, 10);
    assert_eq!(options.exclude_dirs, DEFAULT_EXCLUDED_DIRS.map(String::from).to_vec());
    assert!(options.ignore_patterns.is_empty());
    assert!(!options.respect_gitignore);
    assert!(!options.follow_links);
    assert_eq!(options.max_depth, None);
    assert_eq!(options.binary_detection, BinaryDetection::Accurate);
}
