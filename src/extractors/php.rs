//! PHP pattern extractor (.php).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(
            r"function\s+(\w+)\s*\(",
            RecordKind::Function,
            PARSED_FROM_SYNTAX,
        ),
        DeclarationPattern::new(
            r"(?:class|interface|trait)\s+(\w+)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
    ]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::Php, &PATTERNS, content)
}
