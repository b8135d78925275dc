//! Jac pattern extractor (.jac) for Jaseci graph programs.

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![DeclarationPattern::new(
        r"(?:walker|node|edge|graph|can)\s+(\w+)",
        RecordKind::Construct,
        PARSED_FROM_SYNTAX,
    )]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::Jac, &PATTERNS, content)
}
