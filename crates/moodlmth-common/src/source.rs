//! Input loading: turn a CLI target into raw HTML text.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::net::{fetch_text, is_remote};

/// Error type for input loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file
    #[error("File error: {0}")]
    FileError(String),
    /// Failed to fetch URL
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Neither an existing path nor an http(s) URL
    #[error("Invalid target: {0}")]
    InvalidTarget(String),
    /// The target was readable but held no text
    #[error("No content found in {0}")]
    Empty(String),
}

/// Load the raw HTML for `target`.
///
/// `http://` and `https://` targets are fetched; anything else must be an
/// existing file path.
///
/// # Errors
///
/// Returns a [`LoadError`] if the target is neither a URL nor an existing
/// path, if reading or fetching fails, or if the content is empty.
pub fn load_target(target: &str) -> Result<String, LoadError> {
    let content = if is_remote(target) {
        fetch_text(target).map_err(LoadError::NetworkError)?
    } else if Path::new(target).exists() {
        fs::read_to_string(target)
            .map_err(|e| LoadError::FileError(format!("Failed to read '{target}': {e}")))?
    } else {
        return Err(LoadError::InvalidTarget(target.to_string()));
    };

    if content.is_empty() {
        return Err(LoadError::Empty(target.to_string()));
    }
    Ok(content)
}
