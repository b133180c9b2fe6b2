//! Colored warning output for one conversion run.
//!
//! The converter core never prints. The CLI owns a [`WarningLog`] and routes
//! each returned diagnostic through it.

use std::collections::HashSet;

use owo_colors::OwoColorize;

/// Format a warning line the way [`WarningLog::warn`] prints it, without color.
#[must_use]
pub fn format_warning(component: &str, message: &str) -> String {
    format!("[moodlmth {component}] ⚠ {message}")
}

/// Prints each distinct problem once.
///
/// Problems are keyed by the caller, so two diagnostics with different
/// wording but the same kind and tag count as one.
#[derive(Debug, Default)]
pub struct WarningLog {
    seen: HashSet<String>,
}

impl WarningLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Print `message` unless `key` was already warned about.
    ///
    /// Returns `true` if the warning was printed.
    ///
    /// ```ignore
    /// let mut log = WarningLog::new();
    /// log.warn("Tree Builder", "unknown_tag:countdown", "Tag not found in htmldoom: countdown");
    /// ```
    pub fn warn(&mut self, component: &str, key: &str, message: &str) -> bool {
        let fresh = self.seen.insert(format!("{component}/{key}"));
        if fresh {
            eprintln!("{}", format_warning(component, message).yellow());
        }
        fresh
    }

    /// Number of distinct warnings printed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing was printed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
