//! Dialect registry for webcheck-rs.
//!
//! A *dialect* is a named source-text convention: which comment syntax it
//! uses, and which attribute names are idiomatic for it. The registry is a
//! static table defined once at compile time; nothing in it is ever mutated.
//!
//! The validator in `markup-diagnostics` dispatches on the family predicates
//! (`is_component`, `is_script`, `is_tag_based`, `prefers_class_attribute`)
//! rather than matching on individual dialects, so adding a dialect is a
//! data change here, not a logic change there.

use std::fmt;

/// Identifier for a supported source dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectId {
    /// JSX component files (`.jsx`).
    Jsx,
    /// TSX component files (`.tsx`).
    Tsx,
    /// Plain JavaScript (`.js`).
    Js,
    /// Plain TypeScript (`.ts`).
    Ts,
    /// Server-side PHP (`.php`).
    Php,
    /// Plain HTML markup (`.html`, `.htm`).
    Html,
    /// Vue single-file components (`.vue`).
    Vue,
}

impl DialectId {
    /// All supported dialects, in registry order.
    pub const ALL: &'static [DialectId] = &[
        DialectId::Jsx,
        DialectId::Tsx,
        DialectId::Js,
        DialectId::Ts,
        DialectId::Php,
        DialectId::Html,
        DialectId::Vue,
    ];

    /// Returns the stable identifier string for this dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            DialectId::Jsx => "jsx",
            DialectId::Tsx => "tsx",
            DialectId::Js => "js",
            DialectId::Ts => "ts",
            DialectId::Php => "php",
            DialectId::Html => "html",
            DialectId::Vue => "vue",
        }
    }

    /// Infers a dialect from a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<DialectId> {
        match ext.to_ascii_lowercase().as_str() {
            "jsx" => Some(DialectId::Jsx),
            "tsx" => Some(DialectId::Tsx),
            "js" | "mjs" | "cjs" => Some(DialectId::Js),
            "ts" | "mts" | "cts" => Some(DialectId::Ts),
            "php" => Some(DialectId::Php),
            "html" | "htm" => Some(DialectId::Html),
            "vue" => Some(DialectId::Vue),
            _ => None,
        }
    }

    /// Component dialects: JSX-flavored markup embedded in script.
    pub fn is_component(&self) -> bool {
        matches!(self, DialectId::Jsx | DialectId::Tsx)
    }

    /// Plain script dialects (no embedded markup conventions).
    pub fn is_script(&self) -> bool {
        matches!(self, DialectId::Js | DialectId::Ts)
    }

    /// Dialects whose canonical comment form is the C-style `//`.
    pub fn uses_line_comments(&self) -> bool {
        self.is_component() || self.is_script()
    }

    /// Script-like dialects: statements are expected to end in `;`.
    pub fn is_script_like(&self) -> bool {
        self.is_component() || self.is_script()
    }

    /// Tag-based dialects: element open/close balance is meaningful per line.
    pub fn is_tag_based(&self) -> bool {
        matches!(
            self,
            DialectId::Jsx | DialectId::Tsx | DialectId::Html | DialectId::Vue
        )
    }

    /// Dialects where `class=` (not `className=`) is the idiomatic attribute.
    pub fn prefers_class_attribute(&self) -> bool {
        matches!(self, DialectId::Html | DialectId::Php | DialectId::Vue)
    }
}

impl fmt::Display for DialectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static configuration for one dialect.
///
/// Pure data; every field is `'static` and the table below is the only
/// place instances are constructed.
#[derive(Debug, Clone, Copy)]
pub struct DialectConfig {
    /// The dialect this configuration belongs to.
    pub id: DialectId,
    /// Human-readable name used in diagnostic messages.
    pub display_name: &'static str,
    /// Canonical line-comment token, if the dialect has one.
    pub line_comment: Option<&'static str>,
    /// Block-comment open/close delimiters.
    pub block_comment: (&'static str, &'static str),
    /// Secondary line-comment token accepted by the dialect.
    pub alternate_comment: Option<&'static str>,
    /// Attribute names considered idiomatic for the dialect, in
    /// presentation order.
    pub idiomatic_attributes: &'static [&'static str],
}

static REGISTRY: &[DialectConfig] = &[
    DialectConfig {
        id: DialectId::Jsx,
        display_name: "JSX",
        line_comment: Some("//"),
        block_comment: ("/*", "*/"),
        alternate_comment: None,
        idiomatic_attributes: &["className", "htmlFor", "onClick", "onChange", "onSubmit"],
    },
    DialectConfig {
        id: DialectId::Tsx,
        display_name: "TSX",
        line_comment: Some("//"),
        block_comment: ("/*", "*/"),
        alternate_comment: None,
        idiomatic_attributes: &["className", "htmlFor", "onClick", "onChange", "onSubmit"],
    },
    DialectConfig {
        id: DialectId::Js,
        display_name: "JavaScript",
        line_comment: Some("//"),
        block_comment: ("/*", "*/"),
        alternate_comment: None,
        idiomatic_attributes: &[],
    },
    DialectConfig {
        id: DialectId::Ts,
        display_name: "TypeScript",
        line_comment: Some("//"),
        block_comment: ("/*", "*/"),
        alternate_comment: None,
        idiomatic_attributes: &[],
    },
    DialectConfig {
        id: DialectId::Php,
        display_name: "PHP",
        line_comment: Some("//"),
        block_comment: ("/*", "*/"),
        alternate_comment: Some("#"),
        idiomatic_attributes: &["class", "for", "onclick", "onchange", "onsubmit"],
    },
    DialectConfig {
        id: DialectId::Html,
        display_name: "HTML",
        line_comment: None,
        block_comment: ("<!--", "-->"),
        alternate_comment: None,
        idiomatic_attributes: &["class", "for", "onclick", "onchange", "onsubmit"],
    },
    DialectConfig {
        id: DialectId::Vue,
        display_name: "Vue",
        line_comment: None,
        block_comment: ("<!--", "-->"),
        alternate_comment: None,
        idiomatic_attributes: &["class", "for", "@click", "@change", "@submit"],
    },
];

/// Looks up the static configuration for a dialect.
pub fn config(id: DialectId) -> &'static DialectConfig {
    REGISTRY
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&REGISTRY[0])
}

/// Returns the full registry, in declaration order.
pub fn all() -> &'static [DialectConfig] {
    REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_covers_every_dialect() {
        for &id in DialectId::ALL {
            assert_eq!(config(id).id, id);
        }
        assert_eq!(all().len(), DialectId::ALL.len());
    }

    #[test]
    fn extension_inference() {
        assert_eq!(DialectId::from_extension("jsx"), Some(DialectId::Jsx));
        assert_eq!(DialectId::from_extension("HTM"), Some(DialectId::Html));
        assert_eq!(DialectId::from_extension("mjs"), Some(DialectId::Js));
        assert_eq!(DialectId::from_extension("rs"), None);
    }

    #[test]
    fn families() {
        assert!(DialectId::Jsx.is_component());
        assert!(DialectId::Jsx.is_tag_based());
        assert!(DialectId::Js.uses_line_comments());
        assert!(!DialectId::Js.is_tag_based());
        assert!(DialectId::Html.prefers_class_attribute());
        assert!(!DialectId::Html.uses_line_comments());
        assert!(DialectId::Vue.is_tag_based());
        assert!(!DialectId::Vue.is_script_like());
    }

    #[test]
    fn comment_tokens() {
        assert_eq!(config(DialectId::Php).alternate_comment, Some("#"));
        assert_eq!(config(DialectId::Html).block_comment, ("<!--", "-->"));
        assert_eq!(config(DialectId::Tsx).line_comment, Some("//"));
    }
}
