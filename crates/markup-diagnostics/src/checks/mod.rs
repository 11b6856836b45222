//! Per-category check catalogs.
//!
//! Each module owns the regex catalog for one diagnostic category and
//! exposes a `check_line` applied to every line of the input. The checks
//! are deliberately heuristic: the contract is "catches the fixed catalog
//! of common mistakes", not full parsing correctness.

pub mod attribute;
pub mod comment;
pub mod structure;
pub mod style;
