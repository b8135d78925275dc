//! Swift pattern extractor (.swift).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(r"func\s+(\w+)\s*\(", RecordKind::Function, PARSED_FROM_SYNTAX),
        DeclarationPattern::new(
            r"(?:class|struct|enum|protocol)\s+(\w+)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
    ]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::Swift, &PATTERNS, content)
}
