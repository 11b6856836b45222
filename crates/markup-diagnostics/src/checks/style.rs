//! Style checks.
//!
//! One check lives here: a statement-shaped line in a script-like dialect
//! that does not end in a terminator or bracket probably wants a `;`.

use std::sync::LazyLock;

use regex::Regex;
use web_dialects::DialectConfig;

use crate::diagnostic::{Category, Diagnostic};

/// Declaration, control, and module keywords that open a statement.
static STATEMENT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:let|const|var|return|import|export|if|for|while)\b").expect("valid regex")
});

/// Characters that already settle how the statement ends.
const STATEMENT_ENDINGS: [char; 9] = [';', '{', '}', '(', ')', '[', ']', ',', ':'];

/// Runs the style checks against one line.
pub fn check_line(line: usize, trimmed: &str, dialect: &DialectConfig) -> Vec<Diagnostic> {
    if !dialect.id.is_script_like() {
        return Vec::new();
    }

    if trimmed.is_empty()
        || trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*')
        || trimmed.starts_with('#')
    {
        return Vec::new();
    }

    if !STATEMENT_KEYWORD.is_match(trimmed) {
        return Vec::new();
    }

    // Arrow functions routinely continue on the next line.
    if trimmed.contains("=>") {
        return Vec::new();
    }

    if trimmed.ends_with(STATEMENT_ENDINGS) {
        return Vec::new();
    }

    vec![
        Diagnostic::warning(
            line,
            Category::Style,
            "statement may be missing a terminating `;`",
        )
        .with_suggestion(format!("{trimmed};")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use web_dialects::{config, DialectId};

    fn run(line: &str, id: DialectId) -> Vec<Diagnostic> {
        check_line(1, line.trim(), config(id))
    }

    #[test]
    fn missing_semicolon() {
        let diags = run("let x = 1", DialectId::Js);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].category, Category::Style);
        assert_eq!(diags[0].suggestion.as_deref(), Some("let x = 1;"));
    }

    #[test]
    fn terminated_statement_is_fine() {
        assert!(run("let x = 1;", DialectId::Ts).is_empty());
        assert!(run("if (x) {", DialectId::Js).is_empty());
        assert!(run("return (", DialectId::Jsx).is_empty());
    }

    #[test]
    fn arrow_functions_are_exempt() {
        assert!(run("const f = () => x", DialectId::Ts).is_empty());
    }

    #[test]
    fn comments_are_skipped() {
        assert!(run("// let x = 1", DialectId::Js).is_empty());
        assert!(run("* let x = 1", DialectId::Js).is_empty());
    }

    #[test]
    fn non_statement_lines_are_skipped() {
        assert!(run("x += 1", DialectId::Js).is_empty());
        assert!(run("", DialectId::Js).is_empty());
    }

    #[test]
    fn markup_dialects_are_exempt() {
        assert!(run("let x = 1", DialectId::Html).is_empty());
    }
}
