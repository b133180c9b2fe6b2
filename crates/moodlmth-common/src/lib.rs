//! Common utilities for the moodlmth converter.
//!
//! This crate provides shared infrastructure used by the converter and its CLI:
//! - **Warning System** - colored, deduplicated terminal output for diagnostics
//! - **Input Loading** - read a page from a local path or fetch it over HTTP

pub mod net;
pub mod source;
pub mod warning;
