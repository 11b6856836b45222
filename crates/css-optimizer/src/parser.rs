//! CSS rule parsing.
//!
//! A regex-and-scan decomposition of CSS text into flat rules and one level
//! of `@media` blocks. Not a CSS parser: no nesting, no at-rule grammar, no
//! selector parsing. Non-CSS input yields fewer or zero rules rather than
//! an error.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Block comments, non-greedy, across lines.
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));

/// A flat `selector { declarations }` pair with no nested braces.
static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^{}]+)\{([^{}]*)\}").expect("valid regex"));

/// One parsed rule occurrence.
///
/// Both sides are non-empty after trimming; occurrences that trim to
/// nothing are discarded during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    /// The selector text, whitespace-normalized.
    pub selector: String,
    /// Property -> value, in source order. Last write wins when the same
    /// property repeats within one occurrence.
    pub declarations: IndexMap<String, String>,
}

/// A top-level `@media` block. Nesting depth is exactly one level; media
/// blocks inside media blocks are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    /// The media query, whitespace-normalized.
    pub query: String,
    /// The rules inside the block, in source order.
    pub rules: Vec<ParsedRule>,
}

/// The result of parsing one CSS text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCss {
    /// Top-level rules, in source order.
    pub rules: Vec<ParsedRule>,
    /// Media blocks, in source order.
    pub media_blocks: Vec<MediaBlock>,
}

/// Parses CSS text into flat rules and media blocks.
pub fn parse(css: &str) -> ParsedCss {
    let stripped = BLOCK_COMMENT.replace_all(css, "");
    let (media_blocks, remainder) = split_media_blocks(&stripped);

    ParsedCss {
        rules: parse_rule_list(&remainder),
        media_blocks: media_blocks
            .into_iter()
            .map(|(query, body)| MediaBlock {
                query,
                rules: parse_rule_list(&body),
            })
            .collect(),
    }
}

/// Extracts every top-level `@media` block with a forward scan, returning
/// the blocks and the text that remains once they are removed.
fn split_media_blocks(text: &str) -> (Vec<(String, String)>, String) {
    let mut blocks = Vec::new();
    let mut remainder = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(at) = rest.find("@media") {
        remainder.push_str(&rest[..at]);
        let tail = &rest[at..];

        match media_block(tail) {
            Some((query, body, consumed)) => {
                blocks.push((normalize_whitespace(query), body.to_string()));
                rest = &tail[consumed..];
            }
            None => {
                // Unbalanced braces: keep the text for the flat-rule scan.
                remainder.push_str(tail);
                rest = "";
            }
        }
    }

    remainder.push_str(rest);
    (blocks, remainder)
}

/// Matches one `@media <query> { <body> }` at the start of `text` by
/// counting braces. Returns the query, the body, and the bytes consumed.
fn media_block(text: &str) -> Option<(&str, &str, usize)> {
    let open = text.find('{')?;
    let query = text["@media".len()..open].trim();

    let mut depth = 0usize;
    for (i, byte) in text.bytes().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some((query, &text[open + 1..i], i + 1));
                }
            }
            _ => {}
        }
    }

    None
}

/// Scans flat text for `selector { declarations }` occurrences.
fn parse_rule_list(text: &str) -> Vec<ParsedRule> {
    let mut rules = Vec::new();

    for captures in RULE.captures_iter(text) {
        let selector = normalize_whitespace(&captures[1]);
        if selector.is_empty() {
            continue;
        }

        let declarations = parse_declarations(&captures[2]);
        if declarations.is_empty() {
            continue;
        }

        rules.push(ParsedRule {
            selector,
            declarations,
        });
    }

    rules
}

/// Splits a declaration body on `;`, then each declaration on the first
/// `:`. Malformed or empty declarations are silently skipped.
fn parse_declarations(body: &str) -> IndexMap<String, String> {
    let mut declarations = IndexMap::new();

    for part in body.split(';') {
        let Some((property, value)) = part.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        declarations.insert(property.to_string(), value.to_string());
    }

    declarations
}

/// Collapses runs of whitespace to single spaces and trims the ends.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_flat_rules() {
        let parsed = parse(".a { color: red; margin: 0 }\n.b{padding:4px;}");
        assert_eq!(parsed.rules.len(), 2);
        assert_eq!(parsed.rules[0].selector, ".a");
        assert_eq!(parsed.rules[0].declarations["color"], "red");
        assert_eq!(parsed.rules[0].declarations["margin"], "0");
        assert_eq!(parsed.rules[1].selector, ".b");
        assert!(parsed.media_blocks.is_empty());
    }

    #[test]
    fn strips_block_comments() {
        let parsed = parse("/* note\nspanning lines */ .a{color:red} /* x */");
        assert_eq!(parsed.rules.len(), 1);
        assert_eq!(parsed.rules[0].selector, ".a");
    }

    #[test]
    fn extracts_media_blocks_separately() {
        let css = ".a{color:red}@media (max-width: 600px){.b{color:blue}}.c{margin:0}";
        let parsed = parse(css);

        assert_eq!(parsed.rules.len(), 2);
        assert_eq!(parsed.rules[0].selector, ".a");
        assert_eq!(parsed.rules[1].selector, ".c");

        assert_eq!(parsed.media_blocks.len(), 1);
        assert_eq!(parsed.media_blocks[0].query, "(max-width: 600px)");
        assert_eq!(parsed.media_blocks[0].rules.len(), 1);
        assert_eq!(parsed.media_blocks[0].rules[0].selector, ".b");
    }

    #[test]
    fn duplicate_property_in_one_occurrence_last_write_wins() {
        let parsed = parse(".a{color:red;color:blue}");
        assert_eq!(parsed.rules[0].declarations["color"], "blue");
        assert_eq!(parsed.rules[0].declarations.len(), 1);
    }

    #[test]
    fn malformed_declarations_are_skipped() {
        let parsed = parse(".a{color:red;;broken;:orphan;margin:}");
        let decls = &parsed.rules[0].declarations;
        assert_eq!(decls.len(), 1);
        assert_eq!(decls["color"], "red");
    }

    #[test]
    fn empty_rules_are_discarded() {
        let parsed = parse(".a{}  {color:red}  .b{   }");
        assert!(parsed.rules.is_empty());
    }

    #[test]
    fn value_with_colon_splits_on_first_colon() {
        let parsed = parse(".a{background:url(http://example.com/x.png)}");
        assert_eq!(
            parsed.rules[0].declarations["background"],
            "url(http://example.com/x.png)"
        );
    }

    #[test]
    fn unbalanced_media_block_falls_back_to_flat_scan() {
        let parsed = parse("@media (min-width:10px){.a{color:red}");
        // The dangling block never closes; the inner rule is still found by
        // the flat scan.
        assert!(parsed.media_blocks.is_empty());
        assert!(parsed.rules.iter().any(|r| r.selector.contains(".a")));
    }

    #[test]
    fn non_css_input_yields_nothing() {
        assert_eq!(parse("not css at all"), ParsedCss::default());
        assert_eq!(parse(""), ParsedCss::default());
    }
}
