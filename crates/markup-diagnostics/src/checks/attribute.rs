//! Attribute checks.
//!
//! Component dialects (JSX/TSX) expect `className`, `htmlFor`, camelCased
//! event handlers and object-valued `style`; plain markup dialects expect
//! the HTML originals. Suggestions are built by swapping the attribute name
//! token and keeping the author's value.

use std::sync::LazyLock;

use regex::Regex;
use web_dialects::DialectConfig;

use crate::diagnostic::{Category, Diagnostic};

/// `class=` with a quoted or braced value, value captured.
static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bclass=("[^"]*"|'[^']*'|\{[^}]*\})"#).expect("valid regex"));

/// `for=` with a quoted or braced value, value captured.
static FOR_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bfor=("[^"]*"|'[^']*'|\{[^}]*\})"#).expect("valid regex"));

/// `className=` with a quoted or braced value, value captured.
static CLASSNAME_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bclassName=("[^"]*"|'[^']*'|\{[^}]*\})"#).expect("valid regex")
});

/// Inline `style` with a string value.
static STYLE_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bstyle=("[^"]*"|'[^']*')"#).expect("valid regex"));

/// All-lowercase event handlers from the fixed catalog. Case-sensitive, so
/// the camelCased forms do not match.
static LOWERCASE_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(onclick|onchange|onsubmit)=").expect("valid regex"));

/// Upper-cases the character right after the `on` prefix: `onclick` ->
/// `onClick`.
fn camel_case_handler(token: &str) -> String {
    let (prefix, rest) = token.split_at(2);
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) => format!("{prefix}{}{}", c.to_ascii_uppercase(), chars.as_str()),
        None => token.to_string(),
    }
}

/// Runs the attribute checks against one line.
pub fn check_line(line: usize, raw: &str, dialect: &DialectConfig) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    if dialect.id.is_component() {
        if !raw.contains("className=") {
            if let Some(captures) = CLASS_ATTR.captures(raw) {
                out.push(
                    Diagnostic::error(
                        line,
                        Category::Attribute,
                        format!("`class` is `className` in {}", dialect.display_name),
                    )
                    .with_suggestion(format!("className={}", &captures[1])),
                );
            }
        }

        if let Some(captures) = FOR_ATTR.captures(raw) {
            out.push(
                Diagnostic::error(
                    line,
                    Category::Attribute,
                    format!("`for` is `htmlFor` in {}", dialect.display_name),
                )
                .with_suggestion(format!("htmlFor={}", &captures[1])),
            );
        }

        if STYLE_STRING.is_match(raw) {
            out.push(Diagnostic::error(
                line,
                Category::Attribute,
                format!(
                    "inline `style` strings are not valid in {}; pass a style object",
                    dialect.display_name
                ),
            ));
        }

        if let Some(captures) = LOWERCASE_HANDLER.captures(raw) {
            let token = &captures[1];
            let camel = camel_case_handler(token);
            out.push(
                Diagnostic::error(
                    line,
                    Category::Attribute,
                    format!(
                        "lowercase event handler `{token}` in {}; use `{camel}`",
                        dialect.display_name
                    ),
                )
                .with_suggestion(format!("{camel}=")),
            );
        }
    }

    if dialect.id.prefers_class_attribute() {
        if let Some(captures) = CLASSNAME_ATTR.captures(raw) {
            out.push(
                Diagnostic::error(
                    line,
                    Category::Attribute,
                    format!(
                        "`className` is not an attribute in {}; use `class`",
                        dialect.display_name
                    ),
                )
                .with_suggestion(format!("class={}", &captures[1])),
            );
        }
    }

    out
}
