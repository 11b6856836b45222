//! Selector grouping, usage filtering, and compact re-serialization.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::parser::{self, ParsedRule};
use crate::usage::ClassNameSet;

/// A class token inside a selector, name captured without the dot.
static CLASS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([A-Za-z_][A-Za-z0-9_-]*)").expect("valid regex"));

/// Optimizes CSS text.
///
/// Duplicate selectors are merged into one rule, later declarations of the
/// same property overwriting earlier ones. When `used_classes` is given,
/// selectors referencing a class outside the set are dropped (see
/// [`selector_is_used`] for the exact heuristic). The same grouping and
/// filtering runs independently inside each `@media` block; a block is
/// emitted only if at least one of its rule groups survives. Output is
/// minified: `sel{prop:val;}` with no extraneous whitespace, top-level
/// groups first, then surviving media blocks, in discovery order.
pub fn optimize(css: &str, used_classes: Option<&ClassNameSet>) -> String {
    let parsed = parser::parse(css);
    let mut out = render_rules(&parsed.rules, used_classes);

    for block in &parsed.media_blocks {
        let body = render_rules(&block.rules, used_classes);
        if !body.is_empty() {
            out.push_str("@media ");
            out.push_str(&block.query);
            out.push('{');
            out.push_str(&body);
            out.push('}');
        }
    }

    out
}

/// Groups rule occurrences by selector, merging declarations with
/// last-write-wins per property, then serializes the surviving groups.
fn render_rules(rules: &[ParsedRule], used_classes: Option<&ClassNameSet>) -> String {
    let mut out = String::new();

    for (selector, declarations) in group_by_selector(rules) {
        if let Some(used) = used_classes {
            if !selector_is_used(&selector, used) {
                continue;
            }
        }

        out.push_str(&selector);
        out.push('{');
        for (property, value) in &declarations {
            out.push_str(property);
            out.push(':');
            out.push_str(value);
            out.push(';');
        }
        out.push('}');
    }

    out
}

/// Builds the merged selector -> declarations mapping.
///
/// Insertion order of first appearance is preserved for both selectors and
/// properties; re-inserting a property keeps its position but takes the new
/// value. Last write wins is a deliberate design property here, not an
/// artifact of iteration order.
fn group_by_selector(rules: &[ParsedRule]) -> IndexMap<String, IndexMap<String, String>> {
    let mut groups: IndexMap<String, IndexMap<String, String>> = IndexMap::new();

    for rule in rules {
        let group = groups.entry(rule.selector.clone()).or_default();
        for (property, value) in &rule.declarations {
            group.insert(property.clone(), value.clone());
        }
    }

    groups
}

/// Decides whether a selector survives usage filtering.
///
/// Selectors containing `:` (pseudo-classes and pseudo-elements) are always
/// kept, as are selectors with no class tokens at all (element and id
/// selectors). A selector with class tokens is kept only when every token
/// is in the used set: one unused token drops the whole group. That is an
/// aggressive heuristic with known false positives on compound selectors
/// such as `.card.active`, preserved by design.
fn selector_is_used(selector: &str, used: &ClassNameSet) -> bool {
    if selector.contains(':') {
        return true;
    }

    // No class tokens (element/id selectors) means no evidence to drop on.
    for captures in CLASS_TOKEN.captures_iter(selector) {
        if !used.contains(&captures[1]) {
            return false;
        }
    }

    true
}
