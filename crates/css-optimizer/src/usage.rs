//! Class-usage extraction from markup/component source.
//!
//! Three independent patterns cover the common authoring styles for class
//! attributes. This is a literal-substring heuristic, not an expression
//! evaluator: class names built dynamically (with no quoted literal
//! substring) are not detected, and the optimizer will treat them as
//! unused. That is a documented limitation of the usage-driven filter.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;

/// The set of class names considered "live" in accompanying markup.
pub type ClassNameSet = FxHashSet<String>;

/// Pattern (a): a quoted literal assigned directly to the attribute.
static LITERAL_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bclass(?:Name)?\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

/// Pattern (b): a braced wrapper holding a single quoted literal.
static BRACED_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bclass(?:Name)?\s*=\s*\{\s*["']([^"']+)["']\s*\}"#).expect("valid regex")
});

/// Pattern (c): a braced expression; quoted literals anywhere inside count.
/// A superset of (b), kept separate so each authoring style is scanned
/// independently.
static BRACED_EXPR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bclass(?:Name)?\s*=\s*\{([^}]*)\}"#).expect("valid regex"));

/// A quoted literal inside an expression.
static QUOTED_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']([^"']+)["']"#).expect("valid regex"));

/// Extracts the set of distinct class names referenced in markup text.
pub fn extract_class_names(markup: &str) -> ClassNameSet {
    let mut names = ClassNameSet::default();

    for captures in LITERAL_ATTR.captures_iter(markup) {
        insert_tokens(&mut names, &captures[1]);
    }

    for captures in BRACED_LITERAL.captures_iter(markup) {
        insert_tokens(&mut names, &captures[1]);
    }

    for captures in BRACED_EXPR.captures_iter(markup) {
        for literal in QUOTED_LITERAL.captures_iter(&captures[1]) {
            insert_tokens(&mut names, &literal[1]);
        }
    }

    names
}

/// Splits a literal attribute value on whitespace into class tokens.
fn insert_tokens(names: &mut ClassNameSet, value: &str) {
    for token in value.split_whitespace() {
        names.insert(token.to_string());
    }
}
