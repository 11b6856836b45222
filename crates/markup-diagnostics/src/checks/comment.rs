//! Comment-syntax checks.
//!
//! Flags comment forms that belong to a different dialect: `#` comments in
//! C-comment dialects, HTML comments in script, and C-style comments in
//! plain markup.

use std::sync::LazyLock;

use regex::Regex;
use web_dialects::{DialectConfig, DialectId};

use crate::diagnostic::{Category, Diagnostic};

/// A line opening with `//` or `/*` in a markup file.
static MARKUP_C_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?://|/\*)").expect("valid regex"));

const HTML_COMMENT_OPEN: &str = "<!--";
const PHP_CLOSE_TAG: &str = "?>";

/// Runs the comment checks against one line.
pub fn check_line(
    line: usize,
    raw: &str,
    trimmed: &str,
    dialect: &DialectConfig,
) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    if dialect.id.uses_line_comments() {
        // `#` is a shell/PHP comment, not a JS one. Shebang lines are fine.
        if trimmed.starts_with('#') && !trimmed.starts_with("#!") {
            let body = trimmed.trim_start_matches('#').trim_start();
            out.push(
                Diagnostic::error(
                    line,
                    Category::Comment,
                    format!(
                        "`#` does not start a comment in {}; use `//`",
                        dialect.display_name
                    ),
                )
                .with_suggestion(format!("// {body}")),
            );
        }

        if raw.contains(HTML_COMMENT_OPEN) {
            out.push(Diagnostic::error(
                line,
                Category::Comment,
                format!(
                    "HTML comments are not valid in {}; use `{} ... {}`",
                    dialect.display_name, dialect.block_comment.0, dialect.block_comment.1
                ),
            ));
        }
    }

    // In PHP the same line could be inside or outside a `<?php` block, so an
    // HTML comment is only ambiguous, not wrong.
    if dialect.id == DialectId::Php
        && raw.contains(HTML_COMMENT_OPEN)
        && !raw.contains(PHP_CLOSE_TAG)
    {
        out.push(Diagnostic::warning(
            line,
            Category::Comment,
            "HTML comment in a line without `?>`; inside a PHP block use `//` or `#`",
        ));
    }

    if dialect.id == DialectId::Html
        && MARKUP_C_COMMENT.is_match(trimmed)
        && !raw.contains("<script")
    {
        out.push(Diagnostic::error(
            line,
            Category::Comment,
            "HTML comments use `<!-- -->`, not `//` or `/* */`",
        ));
    }

    out
}
