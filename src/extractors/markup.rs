//! Markup summarizer for HTML and XML (.html, .xml).
//!
//! Markup has no functions to name, so this extractor reports one aggregate
//! record describing the tags seen, plus a record per comment block.

use crate::extractors::base::{RecordKind, SymbolRecord};
use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([A-Za-z][\w-]*)").unwrap());
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--(.*?)-->").unwrap());

pub fn extract(language: Language, content: &str) -> Vec<SymbolRecord> {
    let mut records = Vec::new();

    // Distinct tag names in first-seen order
    let mut tags: Vec<&str> = Vec::new();
    for captures in TAG.captures_iter(content) {
        let tag = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    if !tags.is_empty() {
        records.push(SymbolRecord::new(
            language,
            RecordKind::Tags,
            format!("{} tags found", tags.len()),
            tags.join(", "),
        ));
    }

    for (index, captures) in COMMENT.captures_iter(content).enumerate() {
        let text = captures.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        records.push(SymbolRecord::new(
            language,
            RecordKind::Comment,
            format!("comment_{}", index + 1),
            text,
        ));
    }

    records
}
