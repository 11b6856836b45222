//! Dialect-aware syntax diagnostics for webcheck-rs.
//!
//! This crate provides a best-effort, line-oriented validator for web
//! source dialects:
//! - Comment-syntax checks (wrong comment form for the dialect)
//! - Attribute checks (`class` vs `className`, `for` vs `htmlFor`,
//!   lowercase event handlers, inline style strings)
//! - Structural checks (unclosed tags, missing `<?php` tag)
//! - Style checks (statement terminators)
//!
//! It is not a parser: each check is an independent pattern applied per
//! line, false positives and negatives are expected, and the contract is
//! "catches the fixed catalog of common mistakes".
//!
//! # Example
//!
//! ```
//! use markup_diagnostics::validate;
//! use web_dialects::DialectId;
//!
//! let result = validate(r#"<div class="hero">"#, DialectId::Jsx);
//!
//! for diagnostic in &result.errors {
//!     println!("line {}: {}", diagnostic.line, diagnostic.message);
//! }
//! ```

mod checks;
mod diagnostic;

pub use diagnostic::{Category, Diagnostic, Severity, ValidationResult};
pub use web_dialects::DialectId;

use checks::{attribute, comment, structure, style};

/// Validates source text against the conventions of one dialect.
///
/// Never fails, for any input: malformed text simply produces diagnostics
/// (or none), and the empty string produces an empty result. Diagnostics
/// are reported in discovery order: line order, then check order within a
/// line (comment, attribute, structure, style). Multiple checks may fire
/// on the same line.
pub fn validate(source: &str, dialect: DialectId) -> ValidationResult {
    let config = web_dialects::config(dialect);
    let mut result = ValidationResult::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        result.extend(comment::check_line(line, raw, trimmed, config));
        result.extend(attribute::check_line(line, raw, config));
        result.extend(structure::check_line(line, raw, config));
        result.extend(style::check_line(line, trimmed, config));
    }

    result.extend(structure::check_document(source, config));

    result
}
