//! Known-mistake catalog tests against the public API.
//!
//! These pin the concrete behaviors callers rely on, not general parsing
//! correctness: the validator is a heuristic checker by contract.

use markup_diagnostics::{validate, Category, DialectId, Severity};
use pretty_assertions::assert_eq;

#[test]
fn hash_comment_is_a_comment_error() {
    let result = validate("  #comment", DialectId::Jsx);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].category, Category::Comment);
    assert_eq!(result.errors[0].severity, Severity::Error);
    assert_eq!(result.errors[0].line, 1);
}

#[test]
fn class_attribute_suggests_classname_rewrite() {
    let result = validate(r#"<div class="foo">"#, DialectId::Jsx);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].category, Category::Attribute);
    assert_eq!(
        result.errors[0].suggestion.as_deref(),
        Some(r#"className="foo""#)
    );
}

#[test]
fn for_attribute_is_an_attribute_error() {
    let result = validate(r#"<label for="x">"#, DialectId::Jsx);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].category, Category::Attribute);
}

#[test]
fn inline_style_string_is_an_attribute_error() {
    let result = validate(r#"<div style="color:red">"#, DialectId::Jsx);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].category, Category::Attribute);
}

#[test]
fn lowercase_handler_suggests_camel_case() {
    let clean = validate(r#"<button onClick="x">"#, DialectId::Jsx);
    assert!(clean.errors.is_empty());

    let result = validate(r#"<button onclick="x">"#, DialectId::Jsx);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].suggestion.as_deref(), Some("onClick="));
}

#[test]
fn validator_tolerates_arbitrary_text() {
    // Binary-ish garbage, lone braces, huge lines: diagnostics or nothing,
    // never a failure.
    let noise = "\u{0}\u{1}{{{{<<<\n}}}}>>>\n\t\t\t";
    let _ = validate(noise, DialectId::Html);
    let _ = validate(noise, DialectId::Php);
    let _ = validate(noise, DialectId::Tsx);
}

#[test]
fn every_dialect_accepts_empty_input() {
    for &id in DialectId::ALL {
        assert!(validate("", id).is_empty());
    }
}
