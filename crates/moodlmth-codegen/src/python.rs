//! Lexical rules of the generated Python: string and bytes literals,
//! identifiers, and the reserved names an identifier must not shadow.

use std::fmt::Write;

/// Python keywords, soft keywords included.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "case", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "match", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "type", "while", "with", "yield",
];

/// Names in Python's `builtins` module.
pub const BUILTINS: &[&str] = &[
    "ArithmeticError", "AssertionError", "AttributeError", "BaseException", "BlockingIOError",
    "BrokenPipeError", "BufferError", "BytesWarning", "ChildProcessError",
    "ConnectionAbortedError", "ConnectionError", "ConnectionRefusedError",
    "ConnectionResetError", "DeprecationWarning", "EOFError", "Ellipsis", "EnvironmentError",
    "Exception", "FileExistsError", "FileNotFoundError", "FloatingPointError", "FutureWarning",
    "GeneratorExit", "IOError", "ImportError", "ImportWarning", "IndentationError", "IndexError",
    "InterruptedError", "IsADirectoryError", "KeyError", "KeyboardInterrupt", "LookupError",
    "MemoryError", "ModuleNotFoundError", "NameError", "NotADirectoryError", "NotImplemented",
    "NotImplementedError", "OSError", "OverflowError", "PendingDeprecationWarning",
    "PermissionError", "ProcessLookupError", "RecursionError", "ReferenceError",
    "ResourceWarning", "RuntimeError", "RuntimeWarning", "StopAsyncIteration", "StopIteration",
    "SyntaxError", "SyntaxWarning", "SystemError", "SystemExit", "TabError", "TimeoutError",
    "TypeError", "UnboundLocalError", "UnicodeDecodeError", "UnicodeEncodeError",
    "UnicodeError", "UnicodeTranslateError", "UnicodeWarning", "UserWarning", "ValueError",
    "Warning", "ZeroDivisionError", "__build_class__", "__debug__", "__doc__", "__import__",
    "__loader__", "__name__", "__package__", "__spec__", "abs", "aiter", "all", "anext", "any",
    "ascii", "bin", "bool", "breakpoint", "bytearray", "bytes", "callable", "chr", "classmethod",
    "compile", "complex", "copyright", "credits", "delattr", "dict", "dir", "divmod",
    "enumerate", "eval", "exec", "exit", "filter", "float", "format", "frozenset", "getattr",
    "globals", "hasattr", "hash", "help", "hex", "id", "input", "int", "isinstance",
    "issubclass", "iter", "len", "license", "list", "locals", "map", "max", "memoryview", "min",
    "next", "object", "oct", "open", "ord", "pow", "print", "property", "quit", "range", "repr",
    "reversed", "round", "set", "setattr", "slice", "sorted", "staticmethod", "str", "sum",
    "super", "tuple", "type", "vars", "zip",
];

/// Returns true for a bare ASCII identifier: `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns true if `name` is a keyword or a builtin.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    KEYWORDS.contains(&name) || BUILTINS.contains(&name)
}

/// Returns true if `name` can be written as a keyword argument as-is.
#[must_use]
pub fn is_safe_keyword(name: &str) -> bool {
    is_identifier(name) && !is_reserved(name)
}

/// Characters `str.isprintable()` rejects that are not ASCII controls.
fn is_invisible(c: char) -> bool {
    c.is_control()
        || (c.is_whitespace() && c != ' ')
        || matches!(
            c,
            '\u{00AD}' | '\u{200B}'..='\u{200F}' | '\u{2060}'..='\u{2064}' | '\u{FEFF}'
        )
}

/// Double quotes unless that needs more escapes than single quotes.
fn pick_quote(s: &str) -> char {
    let doubles = s.matches('"').count();
    let singles = s.matches('\'').count();
    if doubles > singles { '\'' } else { '"' }
}

/// Render `s` as a Python `str` literal.
///
/// Backslashes, the chosen quote, `\n`, `\r` and `\t` are escaped, and
/// invisible characters are written as `\x`, `\u` or `\U` escapes. Everything
/// else, non-ASCII included, is kept as-is.
#[must_use]
pub fn py_string(s: &str) -> String {
    let quote = pick_quote(s);
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_invisible(c) => {
                let code = u32::from(c);
                let _ = if code <= 0xFF {
                    write!(out, "\\x{code:02x}")
                } else if code <= 0xFFFF {
                    write!(out, "\\u{code:04x}")
                } else {
                    write!(out, "\\U{code:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Render `s` as a Python `bytes` literal of its UTF-8 encoding.
///
/// Printable ASCII is kept; every other byte becomes `\xNN`, so the content
/// survives byte-for-byte.
#[must_use]
pub fn py_bytes(s: &str) -> String {
    let quote = pick_quote(s);
    let mut out = String::with_capacity(s.len() + 3);
    out.push('b');
    out.push(quote);
    for byte in s.bytes() {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if char::from(b) == quote => {
                out.push('\\');
                out.push(quote);
            }
            0x20..=0x7E => out.push(char::from(byte)),
            _ => {
                let _ = write!(out, "\\x{byte:02x}");
            }
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string() {
        assert_eq!(py_string("Hello"), r#""Hello""#);
        assert_eq!(py_string(""), r#""""#);
    }

    #[test]
    fn test_string_quote_choice() {
        assert_eq!(py_string("it's"), r#""it's""#);
        assert_eq!(py_string(r#"say "hi""#), r#"'say "hi"'"#);
        assert_eq!(py_string(r#"a"b'c"#), r#""a\"b'c""#);
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(py_string("a\\b"), r#""a\\b""#);
        assert_eq!(py_string("a\nb\tc\r"), r#""a\nb\tc\r""#);
        assert_eq!(py_string("\u{0}"), r#""\x00""#);
        assert_eq!(py_string("a\u{00A0}b"), r#""a\xa0b""#);
        assert_eq!(py_string("\u{FEFF}"), r#""\ufeff""#);
    }

    #[test]
    fn test_string_keeps_unicode() {
        assert_eq!(py_string("café ©"), "\"café ©\"");
        assert_eq!(py_string("{x}"), r#""{x}""#);
    }

    #[test]
    fn test_bytes() {
        assert_eq!(py_bytes("{}"), r#"b"{}""#);
        assert_eq!(py_bytes("var x = {a: 1};"), r#"b"var x = {a: 1};""#);
        assert_eq!(py_bytes("a\nb"), r#"b"a\nb""#);
        assert_eq!(py_bytes("é"), r#"b"\xc3\xa9""#);
        assert_eq!(py_bytes(r#"x = "y""#), r#"b'x = "y"'"#);
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("data-x"));
        assert!(!is_identifier("1a"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("@click"));
    }

    #[test]
    fn test_reserved_names() {
        for name in ["id", "type", "class", "for", "input", "async", "map"] {
            assert!(is_reserved(name), "{name} should be reserved");
            assert!(!is_safe_keyword(name));
        }
        assert!(is_safe_keyword("action"));
        assert!(is_safe_keyword("charset"));
    }
}
