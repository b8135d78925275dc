//! Go pattern extractor (.go).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        // Covers plain functions and methods with a receiver
        DeclarationPattern::new(
            r"func\s+(?:\([^)]+\)\s*)?(\w+)\s*\(",
            RecordKind::Function,
            PARSED_FROM_SYNTAX,
        ),
        DeclarationPattern::new(
            r"type\s+(\w+)\s+(?:struct|interface)\b",
            RecordKind::Declaration,
            PARSED_FROM_SYNTAX,
        ),
    ]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::Go, &PATTERNS, content)
}
