//! JVM-family pattern extractors (.java, .kt, .scala).

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, DETECTED_VIA_SYNTAX,
    PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static JAVA_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(
            r"(?:class|interface|enum|record)\s+(\w+)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
        DeclarationPattern::new(
            r"(?m)^\s*(?:public|private|protected|static|final)[\w \t<>\[\],]*[ \t](\w+)\s*\([^)]*\)\s*\{",
            RecordKind::Definition,
            DETECTED_VIA_SYNTAX,
        ),
    ]
});

static KOTLIN_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(r"fun\s+(\w+)\s*\(", RecordKind::Function, PARSED_FROM_SYNTAX),
        DeclarationPattern::new(
            r"(?:class|interface|object)\s+(\w+)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
    ]
});

static SCALA_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(r"def\s+(\w+)", RecordKind::Function, PARSED_FROM_SYNTAX),
        DeclarationPattern::new(
            r"(?:class|trait|object)\s+(\w+)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
    ]
});

pub fn extract(language: Language, content: &str) -> Vec<SymbolRecord> {
    let patterns: &[DeclarationPattern] = match language {
        Language::Java => &JAVA_PATTERNS,
        Language::Kotlin => &KOTLIN_PATTERNS,
        Language::Scala => &SCALA_PATTERNS,
        _ => return Vec::new(),
    };
    extract_with_patterns(language, patterns, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_class_and_method() {
        let source = "public class Cache {\n    private int size;\n    public int get(String key) {\n        return 0;\n    }\n}\n";
        let records = extract(Language::Java, source);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cache", "get"]);
        assert_eq!(records[0].language, "Java");
    }

    #[test]
    fn test_kotlin_fun_and_object() {
        let source = "object Registry {\n    fun register(name: String) {}\n}\nclass Plugin\n";
        let records = extract(Language::Kotlin, source);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["register", "Registry", "Plugin"]);
        assert_eq!(records[0].kind, RecordKind::Function);
        assert_eq!(records[0].docstring, PARSED_FROM_SYNTAX);
    }

    #[test]
    fn test_scala_def_and_trait() {
        let source = "trait Parser {\n  def parse(input: String): Ast\n}\n";
        let records = extract(Language::Scala, source);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["parse", "Parser"]);
        assert_eq!(records[1].kind, RecordKind::Class);
        assert_eq!(records[0].language, "Scala");
    }
}
