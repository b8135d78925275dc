//! Haskell pattern extractor (.hs).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, DETECTED_VIA_SYNTAX,
    PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        // Top-level type signatures: name :: Type
        DeclarationPattern::new(
            r"(?m)^([a-z][\w']*)\s*::",
            RecordKind::Declaration,
            DETECTED_VIA_SYNTAX,
        ),
        DeclarationPattern::new(
            r"(?:data|newtype|type)\s+([A-Z]\w*)",
            RecordKind::Declaration,
            PARSED_FROM_SYNTAX,
        ),
    ]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::Haskell, &PATTERNS, content)
}
