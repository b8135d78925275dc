//! Rust pattern extractor (.rs).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(r"fn\s+(\w+)", RecordKind::Function, PARSED_FROM_SYNTAX),
        DeclarationPattern::new(
            r"(?:struct|enum|trait)\s+(\w+)",
            RecordKind::Declaration,
            PARSED_FROM_SYNTAX,
        ),
    ]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::Rust, &PATTERNS, content)
}
