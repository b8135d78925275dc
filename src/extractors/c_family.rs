//! C-family pattern extractors (.c, .cpp, .cs, .m).
//!
//! Function definitions in these languages have no leading keyword, so the
//! heuristics key on a return type followed by `name(...) {`. That over-
//! matches control flow now and then; the design accepts false positives.

use crate::extractors::base::{
    extract_with_patterns, DeclarationPattern, RecordKind, SymbolRecord, DETECTED_VIA_SYNTAX,
    PARSED_FROM_SYNTAX,
};
use crate::language::Language;
use once_cell::sync::Lazy;

static C_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![DeclarationPattern::new(
        r"(?m)^[A-Za-z_][\w \t\*]*[ \t\*](\w+)\s*\([^;{]*\)\s*\{",
        RecordKind::Definition,
        DETECTED_VIA_SYNTAX,
    )]
});

static CPP_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(
            r"(?:class|struct)\s+(\w+)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
        // Out-of-line member definitions: Type Owner::method(...)
        DeclarationPattern::new(
            r"\w+::(\w+)\s*\(",
            RecordKind::MethodOrClass,
            DETECTED_VIA_SYNTAX,
        ),
        DeclarationPattern::new(
            r"(?m)^[A-Za-z_][\w \t\*&<>:]*[ \t\*&](\w+)\s*\([^;{]*\)\s*\{",
            RecordKind::Definition,
            DETECTED_VIA_SYNTAX,
        ),
    ]
});

static CSHARP_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(
            r"(?:class|interface|struct|enum)\s+(\w+)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
        DeclarationPattern::new(
            r"(?m)^\s*(?:public|private|protected|internal)[\w \t<>\[\],]*[ \t](\w+)\s*\([^)]*\)",
            RecordKind::Definition,
            DETECTED_VIA_SYNTAX,
        ),
    ]
});

static OBJC_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(
            r"@(?:interface|implementation)\s+(\w+)",
            RecordKind::Class,
            PARSED_FROM_SYNTAX,
        ),
        DeclarationPattern::new(
            r"(?m)^\s*[-+]\s*\([^)]*\)\s*(\w+)",
            RecordKind::MethodOrClass,
            PARSED_FROM_SYNTAX,
        ),
    ]
});

pub fn extract(language: Language, content: &str) -> Vec<SymbolRecord> {
    let patterns: &[DeclarationPattern] = match language {
        Language::C => &C_PATTERNS,
        Language::Cpp => &CPP_PATTERNS,
        Language::CSharp => &CSHARP_PATTERNS,
        Language::ObjectiveC => &OBJC_PATTERNS,
        _ => return Vec::new(),
    };
    extract_with_patterns(language, patterns, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_function_definition() {
        let source = "static int parse_header(const char *buf, size_t len) {\n    return 0;\n}\n";
        let records = extract(Language::C, source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "parse_header");
        assert_eq!(records[0].kind, RecordKind::Definition);
        assert_eq!(records[0].language, "C");
    }

    #[test]
    fn test_c_prototype_is_not_a_definition() {
        // Declarations ending in ';' never reach the '{' the pattern requires.
        assert!(extract(Language::C, "int parse_header(const char *buf);\n").is_empty());
    }

    #[test]
    fn test_cpp_class_and_member_definition() {
        let source = "class Lexer {};\nToken Lexer::next_token() {\n    return Token{};\n}\n";
        let records = extract(Language::Cpp, source);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"Lexer"));
        assert!(names.contains(&"next_token"));
        assert_eq!(records[0].language, "C++");
    }

    #[test]
    fn test_csharp_class_and_method() {
        let source = "public class Repo {\n    public async Task<int> CountAsync(string q)\n    {\n        return 0;\n    }\n}\n";
        let records = extract(Language::CSharp, source);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Repo", "CountAsync"]);
    }

    #[test]
    fn test_objc_interface_and_method() {
        let source = "@interface Downloader : NSObject\n- (void)startWithURL:(NSURL *)url;\n@end\n";
        let records = extract(Language::ObjectiveC, source);
        assert_eq!(records[0].name, "Downloader");
        assert_eq!(records[0].kind, RecordKind::Class);
        assert_eq!(records[1].name, "startWithURL");
        assert_eq!(records[1].kind, RecordKind::MethodOrClass);
        assert_eq!(records[1].language, "Objective-C");
    }
}
