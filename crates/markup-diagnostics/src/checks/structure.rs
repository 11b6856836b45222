//! Structural checks.
//!
//! Tag balance is estimated per line with counting regexes, not a parser; a
//! line holding an unclosed `<` is flagged as a possible multi-line element.

use std::sync::LazyLock;

use regex::Regex;
use web_dialects::{DialectConfig, DialectId};

use crate::diagnostic::{Category, Diagnostic};

/// An element opener: `<` followed by a tag name.
static TAG_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z][A-Za-z0-9-]*").expect("valid regex"));

/// An element closer: `</` followed by a tag name.
static TAG_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</[A-Za-z][A-Za-z0-9-]*").expect("valid regex"));

/// Runs the structure checks against one line.
pub fn check_line(line: usize, raw: &str, dialect: &DialectConfig) -> Vec<Diagnostic> {
    if !dialect.id.is_tag_based() {
        return Vec::new();
    }

    // Only lines that open a `<` and never reach a `>` are suspicious; a
    // completed tag on the same line settles the question.
    if !raw.contains('<') || raw.contains('>') {
        return Vec::new();
    }

    let opens = TAG_OPEN.find_iter(raw).count();
    let closes = TAG_CLOSE.find_iter(raw).count();
    if opens != closes {
        return vec![Diagnostic::warning(
            line,
            Category::Structure,
            "tag is not closed on this line; element may span multiple lines",
        )];
    }

    Vec::new()
}

/// Whole-document structural checks.
pub fn check_document(source: &str, dialect: &DialectConfig) -> Vec<Diagnostic> {
    if dialect.id == DialectId::Php && !source.trim().is_empty() && !source.contains("<?") {
        return vec![Diagnostic::warning(
            1,
            Category::Structure,
            "no opening `<?php` tag found in file",
        )];
    }

    Vec::new()
}
