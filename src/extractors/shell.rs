//! Shell pattern extractor (.sh).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, DETECTED_VIA_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        // POSIX form: name() { ... }
        DeclarationPattern::new(
            r"(?m)^\s*([\w-]+)\s*\(\)\s*\{",
            RecordKind::Function,
            DETECTED_VIA_SYNTAX,
        ),
        // Bash keyword form: function name { ... }
        DeclarationPattern::new(
            r"(?m)^\s*function\s+([\w-]+)",
            RecordKind::Function,
            DETECTED_VIA_SYNTAX,
        ),
    ]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::Shell, &PATTERNS, content)
}
