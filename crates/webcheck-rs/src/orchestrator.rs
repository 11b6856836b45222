//! Main orchestration logic.

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use css_optimizer::{extract_class_names, optimize, ClassNameSet, OptimizationStats};
use globset::{Glob, GlobSet, GlobSetBuilder};
use markup_diagnostics::validate;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;
use web_dialects::DialectId;

use crate::cli::{Args, Command, OutputFormat, Threshold};
use crate::output::{collect_visible, CheckSummary, FormattedDiagnostic, Formatter};

/// Orchestration errors.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Failed to read a required input file.
    #[error("failed to read {0}: {1}")]
    ReadFailed(Utf8PathBuf, std::io::Error),

    /// Failed to write the output file.
    #[error("failed to write {0}: {1}")]
    WriteFailed(Utf8PathBuf, std::io::Error),

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(String),
}

/// Runs the selected subcommand.
pub fn run(args: Args) -> Result<CheckSummary, OrchestratorError> {
    match args.command {
        Command::Check {
            workspace,
            dialect,
            output,
            threshold,
            ignore,
            fail_on_warnings,
        } => run_check(
            &workspace,
            dialect.map(DialectId::from),
            output,
            threshold,
            &ignore,
            fail_on_warnings,
        ),
        Command::Optimize {
            css,
            markup,
            keep_unused,
            out,
            stats,
            output,
        } => run_optimize(&css, markup.as_deref(), keep_unused, out.as_deref(), stats, output),
    }
}

/// Validates every matching file under the workspace.
fn run_check(
    workspace: &Utf8Path,
    forced_dialect: Option<DialectId>,
    output: OutputFormat,
    threshold: Threshold,
    ignore: &[String],
    fail_on_warnings: bool,
) -> Result<CheckSummary, OrchestratorError> {
    let ignore_set = build_ignore_set(ignore)?;
    let files = collect_source_files(workspace, &ignore_set);

    let formatter = Formatter::new(output);
    let error_count = AtomicUsize::new(0);
    let warning_count = AtomicUsize::new(0);
    let json_diagnostics: Mutex<Vec<FormattedDiagnostic>> = Mutex::new(Vec::new());
    let text_output: Mutex<Vec<(Utf8PathBuf, String)>> = Mutex::new(Vec::new());

    files.par_iter().for_each(|path| {
        let dialect = forced_dialect.or_else(|| dialect_of(path));
        let Some(dialect) = dialect else {
            return;
        };

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Warning: skipping {path}: {e}");
                return;
            }
        };

        let result = validate(&source, dialect);
        error_count.fetch_add(result.errors.len(), Ordering::Relaxed);
        warning_count.fetch_add(result.warnings.len(), Ordering::Relaxed);

        let visible = collect_visible(&result, threshold);
        if visible.is_empty() {
            return;
        }

        if output == OutputFormat::Json {
            let mut formatted = Formatter::format_json_diagnostics(&visible, path);
            json_diagnostics
                .lock()
                .expect("diagnostics lock")
                .append(&mut formatted);
        } else {
            let rendered = formatter.format(&visible, path, &source);
            text_output
                .lock()
                .expect("output lock")
                .push((path.clone(), rendered));
        }
    });

    if output == OutputFormat::Json {
        let mut diagnostics = json_diagnostics.into_inner().expect("diagnostics lock");
        diagnostics.sort_by(|a, b| (&a.filename, a.line).cmp(&(&b.filename, b.line)));
        println!(
            "{}",
            serde_json::to_string_pretty(&diagnostics).unwrap_or_default()
        );
    } else {
        let mut rendered = text_output.into_inner().expect("output lock");
        rendered.sort_by(|a, b| a.0.cmp(&b.0));
        for (_, text) in &rendered {
            print!("{text}");
        }
    }

    let summary = CheckSummary {
        file_count: files.len(),
        error_count: error_count.into_inner(),
        warning_count: warning_count.into_inner(),
        fail_on_warnings,
    };

    if output != OutputFormat::Json {
        println!("{}", summary.format());
    }

    Ok(summary)
}

/// Statistics payload for `optimize --stats --output json`.
#[derive(Debug, Serialize)]
struct OptimizeReport<'a> {
    css: &'a str,
    stats: Option<OptimizationStats>,
}

/// Optimizes one CSS file, optionally filtering by class usage gathered
/// from markup sources.
fn run_optimize(
    css_path: &Utf8Path,
    markup: Option<&Utf8Path>,
    keep_unused: bool,
    out: Option<&Utf8Path>,
    stats: bool,
    output: OutputFormat,
) -> Result<CheckSummary, OrchestratorError> {
    let css = fs::read_to_string(css_path)
        .map_err(|e| OrchestratorError::ReadFailed(css_path.to_path_buf(), e))?;

    let used_classes = match markup {
        Some(markup_path) if !keep_unused => Some(gather_used_classes(markup_path)?),
        _ => None,
    };

    // A failure inside the optimizer must surface as a visible comment in
    // the output rather than abort the run; statistics are cleared for
    // that call.
    let optimized = panic::catch_unwind(AssertUnwindSafe(|| {
        optimize(&css, used_classes.as_ref())
    }));

    let (optimized, computed_stats) = match optimized {
        Ok(optimized) => {
            let computed = OptimizationStats::compute(
                &css,
                &optimized,
                used_classes.as_ref().map(ClassNameSet::len),
            );
            (optimized, Some(computed))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            (format!("/* optimization failed: {message} */"), None)
        }
    };

    if output == OutputFormat::Json && stats {
        let report = OptimizeReport {
            css: &optimized,
            stats: computed_stats,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        match out {
            Some(out_path) => fs::write(out_path, &optimized)
                .map_err(|e| OrchestratorError::WriteFailed(out_path.to_path_buf(), e))?,
            None => println!("{optimized}"),
        }

        if stats {
            match computed_stats {
                Some(s) => eprintln!(
                    "{} -> {} bytes ({:.1}% reduction){}",
                    s.original_bytes,
                    s.optimized_bytes,
                    s.reduction_percent,
                    s.used_class_count
                        .map(|n| format!(", {n} used classes"))
                        .unwrap_or_default()
                ),
                None => eprintln!("statistics unavailable for this run"),
            }
        }
    }

    Ok(CheckSummary::default())
}

/// Builds the used-class set from one markup file or a whole tree.
fn gather_used_classes(markup_path: &Utf8Path) -> Result<ClassNameSet, OrchestratorError> {
    let files = if markup_path.is_file() {
        vec![markup_path.to_path_buf()]
    } else {
        collect_source_files(markup_path, &GlobSet::empty())
    };

    let mut used = ClassNameSet::default();
    for path in files {
        let source = fs::read_to_string(&path)
            .map_err(|e| OrchestratorError::ReadFailed(path.clone(), e))?;
        used.extend(extract_class_names(&source));
    }

    Ok(used)
}

/// Builds the ignore glob set: user patterns plus defaults.
fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, OrchestratorError> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| OrchestratorError::InvalidGlob(e.to_string()))?;
        builder.add(glob);
    }

    for pattern in ["**/node_modules/**", "**/dist/**", "**/vendor/**", "**/.git/**"] {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }

    builder
        .build()
        .map_err(|e| OrchestratorError::InvalidGlob(e.to_string()))
}

/// Finds files with a recognized dialect extension under the root.
fn collect_source_files(root: &Utf8Path, ignore_set: &GlobSet) -> Vec<Utf8PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
        .filter(|p| dialect_of(p).is_some())
        .filter(|p| {
            let relative = p.strip_prefix(root).unwrap_or(p);
            !ignore_set.is_match(relative.as_str())
        })
        .collect()
}

/// Infers the dialect from a path's extension.
fn dialect_of(path: &Utf8Path) -> Option<DialectId> {
    DialectId::from_extension(path.extension()?)
}

/// Best-effort extraction of a panic payload message.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dialect_inference_from_paths() {
        assert_eq!(dialect_of(Utf8Path::new("src/App.jsx")), Some(DialectId::Jsx));
        assert_eq!(
            dialect_of(Utf8Path::new("index.html")),
            Some(DialectId::Html)
        );
        assert_eq!(dialect_of(Utf8Path::new("notes.txt")), None);
        assert_eq!(dialect_of(Utf8Path::new("Makefile")), None);
    }

    #[test]
    fn ignore_set_rejects_defaults() {
        let set = build_ignore_set(&[]).expect("glob set");
        assert!(set.is_match("node_modules/pkg/index.js"));
        assert!(set.is_match("a/dist/bundle.js"));
        assert!(!set.is_match("src/App.jsx"));
    }

    #[test]
    fn ignore_set_accepts_user_patterns() {
        let set = build_ignore_set(&["**/generated/**".to_string()]).expect("glob set");
        assert!(set.is_match("src/generated/api.ts"));
    }

    #[test]
    fn invalid_glob_is_an_error() {
        assert!(build_ignore_set(&["[".to_string()]).is_err());
    }

    #[test]
    fn panic_message_extraction() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");

        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("kaboom"));
        assert_eq!(panic_message(boxed.as_ref()), "kaboom");
    }
}
