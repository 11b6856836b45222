//! Output formatting.

use camino::Utf8Path;
use markup_diagnostics::{Diagnostic, Severity, ValidationResult};
use serde::Serialize;

use crate::cli::{OutputFormat, Threshold};

/// A formatted diagnostic for output.
#[derive(Debug, Serialize)]
pub struct FormattedDiagnostic {
    /// The diagnostic type (Error, Warning).
    #[serde(rename = "type")]
    pub diagnostic_type: String,
    /// The file path.
    pub filename: String,
    /// 1-indexed line number.
    pub line: usize,
    /// The check category (comment, attribute, structure, style).
    pub category: String,
    /// The message.
    pub message: String,
    /// Optional replacement text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Selects the diagnostics to show, interleaved in line order.
pub fn collect_visible(result: &ValidationResult, threshold: Threshold) -> Vec<&Diagnostic> {
    let mut diagnostics: Vec<&Diagnostic> = match threshold {
        Threshold::Error => result.errors.iter().collect(),
        Threshold::Warning => result.iter().collect(),
    };
    diagnostics.sort_by_key(|d| d.line);
    diagnostics
}

/// Formats diagnostics for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a collection of diagnostics for one file.
    pub fn format(&self, diagnostics: &[&Diagnostic], file_path: &Utf8Path, source: &str) -> String {
        match self.format {
            OutputFormat::Human => self.format_human(diagnostics, file_path),
            OutputFormat::HumanVerbose => self.format_human_verbose(diagnostics, file_path, source),
            OutputFormat::Json => {
                let formatted = Self::format_json_diagnostics(diagnostics, file_path);
                serde_json::to_string_pretty(&formatted).unwrap_or_default()
            }
            OutputFormat::Machine => self.format_machine(diagnostics, file_path),
        }
    }

    fn format_human(&self, diagnostics: &[&Diagnostic], file_path: &Utf8Path) -> String {
        let mut output = String::new();

        for diag in diagnostics {
            output.push_str(&format!(
                "{}:{}\n{}: {} [{}]\n",
                file_path,
                diag.line,
                severity_label(diag.severity),
                diag.message,
                diag.category
            ));
            if let Some(suggestion) = &diag.suggestion {
                output.push_str(&format!("  suggestion: {suggestion}\n"));
            }
            output.push('\n');
        }

        output
    }

    fn format_human_verbose(
        &self,
        diagnostics: &[&Diagnostic],
        file_path: &Utf8Path,
        source: &str,
    ) -> String {
        let lines: Vec<&str> = source.lines().collect();
        let mut output = String::new();

        for diag in diagnostics {
            output.push_str(&format!(
                "{}:{}\n{}: {} [{}]\n",
                file_path,
                diag.line,
                severity_label(diag.severity),
                diag.message,
                diag.category
            ));

            if let Some(text) = lines.get(diag.line.saturating_sub(1)) {
                output.push_str(&format!("  {} | {}\n", diag.line, text));
            }
            if let Some(suggestion) = &diag.suggestion {
                output.push_str(&format!("  suggestion: {suggestion}\n"));
            }

            output.push('\n');
        }

        output
    }

    /// Formats diagnostics into JSON-ready structs.
    pub fn format_json_diagnostics(
        diagnostics: &[&Diagnostic],
        file_path: &Utf8Path,
    ) -> Vec<FormattedDiagnostic> {
        diagnostics
            .iter()
            .map(|diag| FormattedDiagnostic {
                diagnostic_type: severity_label(diag.severity).to_string(),
                filename: file_path.to_string(),
                line: diag.line,
                category: diag.category.to_string(),
                message: diag.message.clone(),
                suggestion: diag.suggestion.clone(),
            })
            .collect()
    }

    fn format_machine(&self, diagnostics: &[&Diagnostic], file_path: &Utf8Path) -> String {
        let mut output = String::new();

        for diag in diagnostics {
            output.push_str(&format!(
                "{} {}:{} {} ({})\n",
                severity_label(diag.severity).to_uppercase(),
                file_path,
                diag.line,
                diag.message,
                diag.category
            ));
        }

        output
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Error",
        Severity::Warning => "Warning",
    }
}

/// Summary of a check run.
#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Number of files checked.
    pub file_count: usize,
    /// Number of errors.
    pub error_count: usize,
    /// Number of warnings.
    pub warning_count: usize,
    /// Whether to fail on warnings.
    pub fail_on_warnings: bool,
}

impl CheckSummary {
    /// Formats the summary line.
    pub fn format(&self) -> String {
        let error_word = if self.error_count == 1 {
            "error"
        } else {
            "errors"
        };
        let warning_word = if self.warning_count == 1 {
            "warning"
        } else {
            "warnings"
        };
        let file_word = if self.file_count == 1 {
            "file"
        } else {
            "files"
        };

        format!(
            "====================================\nwebcheck found {} {} and {} {} in {} {}",
            self.error_count,
            error_word,
            self.warning_count,
            warning_word,
            self.file_count,
            file_word
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup_diagnostics::{validate, DialectId};

    #[test]
    fn test_format_human() {
        let result = validate(r#"<div class="foo">"#, DialectId::Jsx);
        let visible = collect_visible(&result, Threshold::Warning);
        let formatter = Formatter::new(OutputFormat::Human);

        let output = formatter.format(&visible, Utf8Path::new("App.jsx"), "");
        assert!(output.contains("App.jsx:1"));
        assert!(output.contains("[attribute]"));
        assert!(output.contains(r#"suggestion: className="foo""#));
    }

    #[test]
    fn test_format_json() {
        let result = validate("  #comment", DialectId::Tsx);
        let visible = collect_visible(&result, Threshold::Warning);
        let formatter = Formatter::new(OutputFormat::Json);

        let output = formatter.format(&visible, Utf8Path::new("App.tsx"), "");
        assert!(output.contains("\"filename\""));
        assert!(output.contains("App.tsx"));
        assert!(output.contains("\"comment\""));
    }

    #[test]
    fn test_threshold_hides_warnings() {
        let result = validate("let x = 1", DialectId::Js);
        assert_eq!(collect_visible(&result, Threshold::Warning).len(), 1);
        assert!(collect_visible(&result, Threshold::Error).is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = CheckSummary {
            file_count: 5,
            error_count: 2,
            warning_count: 3,
            fail_on_warnings: false,
        };

        let output = summary.format();
        assert!(output.contains("2 errors"));
        assert!(output.contains("3 warnings"));
        assert!(output.contains("5 files"));
    }

    #[test]
    fn test_format_machine() {
        let result = validate("<div", DialectId::Html);
        let visible = collect_visible(&result, Threshold::Warning);
        let formatter = Formatter::new(OutputFormat::Machine);

        let output = formatter.format(&visible, Utf8Path::new("index.html"), "");
        assert!(output.starts_with("WARNING index.html:1"));
    }
}
