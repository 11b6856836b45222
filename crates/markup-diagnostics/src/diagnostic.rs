//! Diagnostic types.

use std::fmt;

/// The severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// A style suggestion; the input still works as written.
    Warning,
    /// A mistake that must be fixed for the dialect.
    Error,
}

/// The category of the check that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Wrong comment syntax for the dialect.
    Comment,
    /// Non-idiomatic attribute name or attribute value shape.
    Attribute,
    /// Structural issue (unbalanced tags, missing open tag).
    Structure,
    /// Style convention (statement terminators).
    Style,
}

impl Category {
    /// Returns the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::Attribute => "attribute",
            Category::Structure => "structure",
            Category::Style => "style",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reported issue, tied to a 1-indexed line number.
///
/// Diagnostics are data, not errors: producing one is the validator working
/// as intended. They are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-indexed line number the issue was found on.
    pub line: usize,
    /// Human-readable description of the issue.
    pub message: String,
    /// The check category that fired.
    pub category: Category,
    /// Whether this is a must-fix error or a style warning.
    pub severity: Severity,
    /// Optional replacement text the author can apply.
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(line: usize, category: Category, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            category,
            severity: Severity::Error,
            suggestion: None,
        }
    }

    /// Creates a warning diagnostic.
    pub fn warning(line: usize, category: Category, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            category,
            severity: Severity::Warning,
            suggestion: None,
        }
    }

    /// Attaches a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Result of validating one source text.
///
/// Both sequences preserve discovery order: line order first, then check
/// order within a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Must-fix issues.
    pub errors: Vec<Diagnostic>,
    /// Style suggestions.
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a diagnostic into the list matching its severity.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    /// Appends every diagnostic from an iterator, in order.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for d in diagnostics {
            self.push(d);
        }
    }

    /// True when no errors were found (warnings are allowed).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when nothing at all was reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Iterates errors then warnings.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }
}
