//! Integration tests for input loading and warnings.

use std::fs;

use moodlmth_common::net::is_remote;
use moodlmth_common::source::{LoadError, load_target};
use moodlmth_common::warning::{WarningLog, format_warning};

/// Helper to write a scratch file under the system temp directory
fn scratch_file(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(format!("moodlmth-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("failed to write scratch file");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_is_remote() {
    assert!(is_remote("http://example.com"));
    assert!(is_remote("https://example.com/index.html"));
    assert!(!is_remote("index.html"));
    assert!(!is_remote("ftp://example.com"));
}

#[test]
fn test_load_existing_file() {
    let path = scratch_file("page.html", "<p>hi</p>");
    let content = load_target(&path).unwrap();
    assert_eq!(content, "<p>hi</p>");
    let _ = fs::remove_file(path);
}

#[test]
fn test_load_empty_file() {
    let path = scratch_file("empty.html", "");
    let err = load_target(&path).unwrap_err();
    assert!(matches!(err, LoadError::Empty(_)));
    let _ = fs::remove_file(path);
}

#[test]
fn test_load_invalid_target() {
    let err = load_target("definitely/not/a/real/page.html").unwrap_err();
    assert!(matches!(err, LoadError::InvalidTarget(_)));
    assert_eq!(
        err.to_string(),
        "Invalid target: definitely/not/a/real/page.html"
    );
}

#[test]
fn test_warning_log_deduplicates_by_key() {
    let mut log = WarningLog::new();
    assert!(log.is_empty());
    assert!(log.warn("Test", "unclosed_tag:p", "Tag was never closed: p"));
    assert!(!log.warn(
        "Test",
        "unclosed_tag:p",
        "Tag was never closed: p (closed by </div>)"
    ));
    assert!(log.warn("Test", "unclosed_tag:li", "Tag was never closed: li"));
    assert_eq!(log.len(), 2);
}

#[test]
fn test_warning_logs_are_independent() {
    let mut first = WarningLog::new();
    let mut second = WarningLog::new();
    assert!(first.warn("Test", "unknown_tag:x-a", "Tag not found in htmldoom: x-a"));
    assert!(second.warn("Test", "unknown_tag:x-a", "Tag not found in htmldoom: x-a"));
}

#[test]
fn test_format_warning() {
    assert_eq!(
        format_warning("Tree Builder", "Tag was never closed: p"),
        "[moodlmth Tree Builder] ⚠ Tag was never closed: p"
    );
}
