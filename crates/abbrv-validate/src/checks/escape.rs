//! Escape-sequence check.
//!
//! The consumer of these lists only understands a handful of backslash
//! escapes. Any other backslash pair is a malformed LaTeX-style escape or a
//! stray backslash.

use abbrv_model::{Category, Finding, Record};

/// Characters allowed after a backslash: `\\`, `\n`, `\t`, `\r`, `\"`.
pub const ALLOWED_ESCAPES: &[char] = &['\\', 'n', 't', 'r', '"'];

/// One finding per offending backslash pair.
pub fn check(file: &str, records: &[Record]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for record in records {
        for field in &record.fields {
            for sequence in invalid_escapes(field) {
                findings.push(Finding::new(
                    Category::WrongEscape,
                    file,
                    record.line,
                    format!("Wrong escape sequence '{sequence}' in: {field}"),
                ));
            }
        }
    }
    findings
}

/// Backslash pairs not in [`ALLOWED_ESCAPES`]. Pairs do not overlap, so
/// `\\x` is an escaped backslash followed by `x`. A trailing lone
/// backslash is not a pair.
fn invalid_escapes(field: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut chars = field.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            continue;
        }
        let Some(next) = chars.next() else {
            break;
        };
        if !ALLOWED_ESCAPES.contains(&next) {
            found.push(format!("\\{next}"));
        }
    }
    found
}
