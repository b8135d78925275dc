//! Base extractor types shared by every language extractor.
//!
//! A [`SymbolRecord`] is the sole unit of extracted metadata: one discovered
//! construct (function, class, tag, selector, ...) with a language label, a
//! coarse kind, a name, and human-readable descriptive text. Records carry no
//! source location; that loss is part of the data model, not an oversight.

use crate::language::Language;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed docstring for declaration-shaped pattern matches.
pub const PARSED_FROM_SYNTAX: &str = "Parsed from syntax";
/// Fixed docstring for looser, heuristic pattern matches.
pub const DETECTED_VIA_SYNTAX: &str = "Detected via syntax";
/// Docstring used when the structural parser finds no documentation string.
pub const NO_DOCSTRING: &str = "No docstring provided";
/// Docstring for the fallback record when structured-data parsing fails.
pub const NON_STRUCTURED_TEXT: &str = "Non-structured text";

/// Coarse classification of an extracted construct.
///
/// Not every extractor uses every kind; each language family reports at the
/// granularity its syntax conventions allow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Class,
    Function,
    Declaration,
    MethodOrClass,
    Definition,
    Construct,
    Tags,
    Comment,
    Selector,
    DataKeys,
    Text,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Class => write!(f, "class"),
            RecordKind::Function => write!(f, "function"),
            RecordKind::Declaration => write!(f, "declaration"),
            RecordKind::MethodOrClass => write!(f, "method_or_class"),
            RecordKind::Definition => write!(f, "definition"),
            RecordKind::Construct => write!(f, "construct"),
            RecordKind::Tags => write!(f, "tags"),
            RecordKind::Comment => write!(f, "comment"),
            RecordKind::Selector => write!(f, "selector"),
            RecordKind::DataKeys => write!(f, "data_keys"),
            RecordKind::Text => write!(f, "text"),
        }
    }
}

/// One extracted construct. All four fields are always populated; `name`
/// uniqueness is not guaranteed (overloads and cross-file duplicates are
/// expected).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolRecord {
    /// Source language or family label, e.g. "Python", "JavaScript/TypeScript"
    pub language: String,
    /// Coarse classification of what was found
    pub kind: RecordKind,
    /// Identifier found, or a synthetic label ("comment_3", "2 tags found")
    pub name: String,
    /// Extracted documentation, a fixed placeholder, or derived summary text
    pub docstring: String,
}

impl SymbolRecord {
    pub fn new(
        language: Language,
        kind: RecordKind,
        name: impl Into<String>,
        docstring: impl Into<String>,
    ) -> Self {
        Self {
            language: language.label().to_string(),
            kind,
            name: name.into(),
            docstring: docstring.into(),
        }
    }
}

/// One regex pattern tuned to a language's declaration syntax, plus the kind
/// and placeholder docstring its matches are reported with.
pub struct DeclarationPattern {
    pub regex: Regex,
    pub kind: RecordKind,
    pub docstring: &'static str,
}

impl DeclarationPattern {
    /// Compile a pattern. The identifier is taken from the `name` capture
    /// group if present, otherwise from capture group 1.
    ///
    /// Panics on an invalid pattern; all patterns are compile-time literals
    /// held in `Lazy` tables, so a bad one is a programming error.
    pub fn new(pattern: &str, kind: RecordKind, docstring: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern {pattern}: {e}")),
            kind,
            docstring,
        }
    }
}

/// Apply a language's pattern list to raw source text.
///
/// Patterns run in list order, matches in text order; overlapping matches
/// across patterns are NOT deduplicated (completeness over precision).
/// Patterns see raw text, so lookalike tokens inside comments and string
/// literals produce records too.
pub fn extract_with_patterns(
    language: Language,
    patterns: &[DeclarationPattern],
    content: &str,
) -> Vec<SymbolRecord> {
    let mut records = Vec::new();
    for pattern in patterns {
        for captures in pattern.regex.captures_iter(content) {
            let name = captures
                .name("name")
                .or_else(|| captures.get(1))
                .map(|m| m.as_str().trim())
                .unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            records.push(SymbolRecord::new(
                language,
                pattern.kind,
                name,
                pattern.docstring,
            ));
        }
    }
    records
}
