//! JavaScript/TypeScript pattern extractor (.js, .ts).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, DETECTED_VIA_SYNTAX,
    PARSED_FROM_SYNTAX,
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
        DeclarationPattern::new(r"class\s+(\w+)", RecordKind::Class, PARSED_FROM_SYNTAX),
        // Arrow functions bound to const/let/var; loose by design
        DeclarationPattern::new(
            r"(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s+)?\([^)]*\)\s*=>",
            RecordKind::Declaration,
            DETECTED_VIA_SYNTAX,
        ),
    ]
});

pub fn extract(content: &str) -> Vec<SymbolRecord> {
    extract_with_patterns(Language::JavaScript, &PATTERNS, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_class_and_arrow_declarations() {
        let source = r#"
function render(tree) {}
class Widget extends Base {}
const fetchUser = async (id) => api.get(id);
"#;
        let records = extract(source);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["render", "Widget", "fetchUser"]);
        assert_eq!(records[0].kind, RecordKind::Function);
        assert_eq!(records[1].kind, RecordKind::Class);
        assert_eq!(records[2].kind, RecordKind::Declaration);
        assert!(records.iter().all(|r| r.language == "JavaScript/TypeScript"));
    }

    #[test]
    fn test_commented_out_function_still_matches() {
        // Raw-text heuristics do not filter comments; false positives are accepted.
        let records = extract("// function legacy() {}\nfunction live() {}\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "legacy");
        assert_eq!(records[1].name, "live");
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert!(extract("const x = 1;\n").is_empty());
    }
}
