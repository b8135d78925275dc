//! Dart pattern extractor (.dart).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, DETECTED_VIA_SYNTAX,
    PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(
            r"(?:class|mixin|extension)\s+(\w+)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
        DeclarationPattern::new(
            r"(?:void|int|double|String|bool|var|Future<[^>]*>|Widget)\s+(\w+)\s*\(",
            RecordKind::Function,
            DETECTED_VIA_SYNTAX,
        ),
    ]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::Dart, &PATTERNS, content)
}
