//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use web_dialects::DialectId;

/// Dialect-aware markup checker and CSS optimizer.
#[derive(Debug, Parser)]
#[command(name = "webcheck-rs")]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate markup/component sources against their dialect conventions
    Check {
        /// File or directory to check
        #[arg(default_value = ".")]
        workspace: Utf8PathBuf,

        /// Force a dialect instead of inferring it from file extensions
        #[arg(long, value_enum)]
        dialect: Option<DialectArg>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        output: OutputFormat,

        /// Minimum severity threshold
        #[arg(long, value_enum, default_value = "warning")]
        threshold: Threshold,

        /// Glob patterns to ignore
        #[arg(long)]
        ignore: Vec<String>,

        /// Exit with error on warnings
        #[arg(long = "fail-on-warnings")]
        fail_on_warnings: bool,
    },

    /// Merge duplicate selectors and strip unused classes from a CSS file
    Optimize {
        /// The CSS file to optimize
        css: Utf8PathBuf,

        /// Markup file or directory to scan for used class names
        #[arg(long)]
        markup: Option<Utf8PathBuf>,

        /// Merge duplicates but keep selectors whose classes are unused
        #[arg(long = "keep-unused")]
        keep_unused: bool,

        /// Write the optimized CSS here instead of stdout
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,

        /// Report byte-size statistics
        #[arg(long)]
        stats: bool,

        /// Output format for the statistics report
        #[arg(long, value_enum, default_value = "human")]
        output: OutputFormat,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// Human-readable with code snippets
    HumanVerbose,
    /// JSON output
    Json,
    /// Machine-readable (one line per diagnostic)
    Machine,
}

/// Severity threshold.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum Threshold {
    /// Only show errors
    Error,
    /// Show errors and warnings (default)
    #[default]
    Warning,
}

/// A dialect selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DialectArg {
    Jsx,
    Tsx,
    Js,
    Ts,
    Php,
    Html,
    Vue,
}

impl From<DialectArg> for DialectId {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Jsx => DialectId::Jsx,
            DialectArg::Tsx => DialectId::Tsx,
            DialectArg::Js => DialectId::Js,
            DialectArg::Ts => DialectId::Ts,
            DialectArg::Php => DialectId::Php,
            DialectArg::Html => DialectId::Html,
            DialectArg::Vue => DialectId::Vue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_check_args() {
        let args = Args::parse_from(["webcheck-rs", "check"]);
        let Command::Check {
            workspace,
            dialect,
            output,
            fail_on_warnings,
            ..
        } = args.command
        else {
            panic!("expected check");
        };
        assert_eq!(workspace.as_str(), ".");
        assert!(dialect.is_none());
        assert_eq!(output, OutputFormat::Human);
        assert!(!fail_on_warnings);
    }

    #[test]
    fn test_forced_dialect() {
        let args = Args::parse_from(["webcheck-rs", "check", "src", "--dialect", "tsx"]);
        let Command::Check {
            workspace, dialect, ..
        } = args.command
        else {
            panic!("expected check");
        };
        assert_eq!(workspace.as_str(), "src");
        assert_eq!(DialectId::from(dialect.expect("dialect")), DialectId::Tsx);
    }

    #[test]
    fn test_output_formats() {
        let args = Args::parse_from(["webcheck-rs", "check", "--output", "machine"]);
        let Command::Check { output, .. } = args.command else {
            panic!("expected check");
        };
        assert_eq!(output, OutputFormat::Machine);
    }

    #[test]
    fn test_optimize_args() {
        let args = Args::parse_from([
            "webcheck-rs",
            "optimize",
            "app.css",
            "--markup",
            "src",
            "--stats",
        ]);
        let Command::Optimize {
            css,
            markup,
            keep_unused,
            stats,
            ..
        } = args.command
        else {
            panic!("expected optimize");
        };
        assert_eq!(css.as_str(), "app.css");
        assert_eq!(markup.as_deref().map(|p| p.as_str()), Some("src"));
        assert!(!keep_unused);
        assert!(stats);
    }
}
