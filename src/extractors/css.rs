//! CSS summarizer (.css): one aggregate record listing discovered selectors.

use crate::extractors::base::{RecordKind, SymbolRecord};
use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;

// Anything before an opening brace is treated as a selector group.
static SELECTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)([^{}]+)\{").unwrap());

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    let selectors: Vec<String> = SELECTOR
        .captures_iter(content)
        .filter_map(|captures| {
            let selector = captures.get(1)?.as_str().trim();
            if selector.is_empty() {
                None
            } else {
                Some(selector.replace(['\n', '\r'], " "))
            }
        })
        .collect();

    if selectors.is_empty() {
        return Vec::new();
    }

    vec![SymbolRecord::new(
        Language::Css,
        RecordKind::Selector,
        format!("{} selectors found", selectors.len()),
        selectors.join(", "),
    )]
}
