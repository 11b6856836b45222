//! Heuristic CSS optimization for webcheck-rs.
//!
//! Three cooperating pieces:
//! - [`parser`]: decomposes CSS text into flat rules and one level of
//!   `@media` blocks (regex-and-scan, tolerant of arbitrary input)
//! - [`usage`]: extracts the set of class names referenced as literals in
//!   accompanying markup/component source
//! - [`optimize`]: merges duplicate selectors (last write wins per
//!   property), optionally drops selectors whose classes are unused, and
//!   re-serializes a minified string
//!
//! All operations are pure, synchronous functions of their inputs; there is
//! no shared state and no I/O. Non-CSS input parses to zero rules rather
//! than failing.
//!
//! # Example
//!
//! ```
//! use css_optimizer::{extract_class_names, optimize, OptimizationStats};
//!
//! let css = ".hero{color:red}.hero{margin:0}.unused{color:blue}";
//! let used = extract_class_names(r#"<div class="hero">"#);
//!
//! let out = optimize(css, Some(&used));
//! assert_eq!(out, ".hero{color:red;margin:0;}");
//!
//! let stats = OptimizationStats::compute(css, &out, Some(used.len()));
//! assert!(stats.optimized_bytes < stats.original_bytes);
//! ```

mod optimize;
pub mod parser;
mod stats;
mod usage;

pub use optimize::optimize;
pub use parser::{MediaBlock, ParsedCss, ParsedRule};
pub use stats::OptimizationStats;
pub use usage::{extract_class_names, ClassNameSet};

/// Parses CSS text into rules and media blocks.
///
/// Re-exported at the crate root as the primary parsing entry point.
pub fn parse(css: &str) -> ParsedCss {
    parser::parse(css)
}
