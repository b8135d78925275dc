//! Pattern extractors for R (.r) and Julia (.jl).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, DETECTED_VIA_SYNTAX,
    PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static R_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![DeclarationPattern::new(
        // R function names commonly contain dots: read.csv.impl <- function(...)
        r"([\w.]+)\s*(?:<-|=)\s*function\s*\(",
        RecordKind::Function,
        DETECTED_VIA_SYNTAX,
    )]
});

static JULIA_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(
            r"function\s+([\w!]+)",
            RecordKind::Function,
            PARSED_FROM_SYNTAX,
        ),
        DeclarationPattern::new(
            r"(?:mutable\s+)?struct\s+(\w+)",
            RecordKind::Declaration,
            PARSED_FROM_SYNTAX,
        ),
        // Short-form definitions: name(args) = expr
        DeclarationPattern::new(
            r"(?m)^([\w!]+)\s*\([^)]*\)\s*=[^=]",
            RecordKind::Function,
            DETECTED_VIA_SYNTAX,
        ),
    ]
});

pub fn extract(language: Language, content: &str) -> Vec<SymbolRecord> {
    let patterns: &[DeclarationPattern] = match language {
        Language::R => &R_PATTERNS,
        Language::Julia => &JULIA_PATTERNS,
        _ => return Vec::new(),
    };
    extract_with_patterns(language, patterns, content)
}
