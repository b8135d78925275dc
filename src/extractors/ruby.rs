//! Ruby pattern extractor (.rb).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        // Method names may end in ? or ! and be defined on self
        DeclarationPattern::new(
            r"def\s+(?:self\.)?([\w]+[?!]?)",
            RecordKind::Function,
            PARSED_FROM_SYNTAX,
        ),
        DeclarationPattern::new(
            r"(?:class|module)\s+([A-Z]\w*)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
    ]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::Ruby, &PATTERNS, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_and_classes() {
        let source = "module Billing\n  class Invoice\n    def total\n    end\n    def self.build(items)\n    end\n    def paid?\n    end\n  end\nend\n";
        let records = extract(source);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["total", "build", "paid?", "Billing", "Invoice"]);
        assert_eq!(records[0].kind, RecordKind::Function);
        assert_eq!(records[3].kind, RecordKind::Class);
        assert_eq!(records[0].language, "Ruby");
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert!(extract("puts 'hello'\n").is_empty());
    }
}
