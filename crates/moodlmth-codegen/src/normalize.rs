//! Style normalization of the generated module.
//!
//! The assembled text is syntactically complete but laid out by the
//! templates. A [`StyleNormalizer`] tidies it before it is returned.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use strum_macros::{Display, EnumString};
use thiserror::Error;

/// How thorough normalization is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NormalizeMode {
    /// Skip validation of the result.
    Fast,
    /// Validate the result.
    #[default]
    Strict,
}

/// A normalizer rejected its input or could not run.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The text is not valid Python.
    #[error("{message}")]
    Syntax {
        /// One-based line of the problem, when known.
        line: Option<usize>,
        /// What went wrong.
        message: String,
    },
    /// An external formatter could not be run.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// The executable.
        program: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// Formats generated Python source.
pub trait StyleNormalizer {
    /// Normalize `text`.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError`] if the text is rejected or the normalizer
    /// cannot run.
    fn normalize(&self, text: &str, mode: NormalizeMode) -> Result<String, NormalizeError>;
}

/// In-process whitespace normalizer.
///
/// Strips trailing whitespace, drops leading blank lines, allows at most two
/// blank lines in a row and ends the text with a single newline. In
/// [`NormalizeMode::Strict`] it first checks that brackets and string
/// literals balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicNormalizer;

impl StyleNormalizer for BasicNormalizer {
    fn normalize(&self, text: &str, mode: NormalizeMode) -> Result<String, NormalizeError> {
        if mode == NormalizeMode::Strict {
            check_balance(text)?;
        }
        Ok(tidy_lines(text))
    }
}

fn tidy_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if out.is_empty() {
                continue;
            }
            blank_run += 1;
            if blank_run > 2 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    let end = out.trim_end_matches('\n').len();
    out.truncate(end);
    out.push('\n');
    out
}

fn syntax_error(line: usize, message: &str) -> NormalizeError {
    NormalizeError::Syntax {
        line: Some(line),
        message: format!("line {line}: {message}"),
    }
}

const fn closer_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Check that brackets pair up and strings end, skipping `#` comments.
fn check_balance(text: &str) -> Result<(), NormalizeError> {
    let chars: Vec<char> = text.chars().collect();
    let mut open: Vec<(char, usize)> = Vec::new();
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\n' => line += 1,
            '#' => {
                while i + 1 < chars.len() && chars[i + 1] != '\n' {
                    i += 1;
                }
            }
            quote @ ('"' | '\'') => {
                let (end, lines) = scan_string(&chars, i, quote)
                    .ok_or_else(|| syntax_error(line, "unterminated string literal"))?;
                i = end;
                line += lines;
            }
            bracket @ ('(' | '[' | '{') => open.push((bracket, line)),
            bracket @ (')' | ']' | '}') => match open.pop() {
                Some((opener, _)) if closer_for(opener) == bracket => {}
                _ => return Err(syntax_error(line, &format!("unmatched '{bracket}'"))),
            },
            _ => {}
        }
        i += 1;
    }

    match open.first() {
        Some((bracket, at)) => Err(syntax_error(*at, &format!("'{bracket}' was never closed"))),
        None => Ok(()),
    }
}

/// Find the end of the string opened at `start`.
///
/// Returns the index of the closing quote and the newlines crossed, or
/// `None` if the string never ends.
fn scan_string(chars: &[char], start: usize, quote: char) -> Option<(usize, usize)> {
    let triple = chars.get(start + 1) == Some(&quote) && chars.get(start + 2) == Some(&quote);
    let mut i = if triple { start + 3 } else { start + 1 };
    let mut lines = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                if chars.get(i + 1) == Some(&'\n') {
                    lines += 1;
                }
                i += 1;
            }
            '\n' if !triple => return None,
            '\n' => lines += 1,
            c if c == quote && !triple => return Some((i, lines)),
            c if c == quote
                && chars.get(i + 1) == Some(&quote)
                && chars.get(i + 2) == Some(&quote) =>
            {
                return Some((i + 2, lines));
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Runs the `black` formatter as a child process.
#[derive(Debug, Clone)]
pub struct BlackNormalizer {
    program: String,
    line_length: u16,
}

impl BlackNormalizer {
    /// Use `program` as the black executable.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Set the maximum line length.
    #[must_use]
    pub const fn with_line_length(mut self, line_length: u16) -> Self {
        self.line_length = line_length;
        self
    }

    fn spawn_error(&self, source: io::Error) -> NormalizeError {
        NormalizeError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl Default for BlackNormalizer {
    fn default() -> Self {
        Self {
            program: "black".to_string(),
            line_length: 79,
        }
    }
}

impl StyleNormalizer for BlackNormalizer {
    fn normalize(&self, text: &str, mode: NormalizeMode) -> Result<String, NormalizeError> {
        let mut args = vec![
            "--quiet".to_string(),
            "--line-length".to_string(),
            self.line_length.to_string(),
        ];
        if mode == NormalizeMode::Fast {
            args.push("--fast".to_string());
        }
        args.push("-".to_string());

        log::debug!("Running {} {}", self.program, args.join(" "));
        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| self.spawn_error(e))?;
        }
        let output = child.wait_with_output().map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(NormalizeError::Syntax {
                line: None,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        String::from_utf8(output.stdout).map_err(|e| NormalizeError::Syntax {
            line: None,
            message: e.to_string(),
        })
    }
}
