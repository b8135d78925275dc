//! Language Support - extension dispatch over the closed set of supported languages
//!
//! This module is the single source of truth for which file extensions are
//! analyzed and which extractor family handles each of them. The set is fixed
//! at build time; anything outside it is skipped during traversal.

use std::path::Path;

/// The closed set of languages (and language families) repodoc extracts from.
///
/// Exactly one of these (`Python`) is parsed structurally; the rest use
/// best-effort pattern matching or bespoke summarizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    Java,
    Cpp,
    C,
    CSharp,
    Ruby,
    Go,
    Php,
    Rust,
    Kotlin,
    Swift,
    ObjectiveC,
    Scala,
    R,
    Julia,
    Dart,
    Haskell,
    Shell,
    Jac,
    Html,
    Css,
    Xml,
    Yaml,
    Json,
}

impl Language {
    /// Detect language from a file extension (without the leading dot).
    ///
    /// Matching is case-insensitive: `.PY` and `.py` are equivalent.
    pub fn from_extension(extension: &str) -> Option<Language> {
        match extension.to_ascii_lowercase().as_str() {
            "py" => Some(Language::Python),
            "js" | "ts" => Some(Language::JavaScript),
            "java" => Some(Language::Java),
            "cpp" => Some(Language::Cpp),
            "c" => Some(Language::C),
            "cs" => Some(Language::CSharp),
            "rb" => Some(Language::Ruby),
            "go" => Some(Language::Go),
            "php" => Some(Language::Php),
            "rs" => Some(Language::Rust),
            "kt" => Some(Language::Kotlin),
            "swift" => Some(Language::Swift),
            "m" => Some(Language::ObjectiveC),
            "scala" => Some(Language::Scala),
            "r" => Some(Language::R),
            "jl" => Some(Language::Julia),
            "dart" => Some(Language::Dart),
            "hs" => Some(Language::Haskell),
            "sh" => Some(Language::Shell),
            "jac" => Some(Language::Jac),
            "html" => Some(Language::Html),
            "css" => Some(Language::Css),
            "xml" => Some(Language::Xml),
            "yml" | "yaml" => Some(Language::Yaml),
            "json" => Some(Language::Json),
            _ => None,
        }
    }

    /// Detect language from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Language> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        Language::from_extension(extension)
    }

    /// Free-form display label carried on every extracted record.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript/TypeScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::CSharp => "C#",
            Language::Ruby => "Ruby",
            Language::Go => "Go",
            Language::Php => "PHP",
            Language::Rust => "Rust",
            Language::Kotlin => "Kotlin",
            Language::Swift => "Swift",
            Language::ObjectiveC => "Objective-C",
            Language::Scala => "Scala",
            Language::R => "R",
            Language::Julia => "Julia",
            Language::Dart => "Dart",
            Language::Haskell => "Haskell",
            Language::Shell => "Shell",
            Language::Jac => "Jac",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Xml => "XML",
            Language::Yaml => "YAML",
            Language::Json => "JSON",
        }
    }
}

/// All file extensions the walker will dispatch (lowercase, without dots).
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "py", "js", "ts", "java", "cpp", "c", "cs", "rb", "go", "php", "rs", "kt", "swift", "m",
    "scala", "r", "jl", "dart", "hs", "sh", "jac", "html", "css", "xml", "yml", "yaml", "json",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_every_supported_extension_maps_to_a_language() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(
                Language::from_extension(ext).is_some(),
                "extension '{}' should dispatch to a language",
                ext
            );
        }
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
        assert_eq!(Language::from_extension("Yaml"), Some(Language::Yaml));
        assert_eq!(Language::from_extension("JS"), Some(Language::JavaScript));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert_eq!(Language::from_extension("unknownext"), None);
        assert_eq!(Language::from_extension("exe"), None);
        assert_eq!(Language::from_extension(""), None);
    }

    #[test]
    fn test_from_path_uses_final_suffix() {
        assert_eq!(
            Language::from_path(&PathBuf::from("src/app.module.ts")),
            Some(Language::JavaScript)
        );
        assert_eq!(Language::from_path(&PathBuf::from("README")), None);
        assert_eq!(Language::from_path(&PathBuf::from("notes.txt")), None);
    }

    #[test]
    fn test_js_and_ts_share_one_family() {
        assert_eq!(
            Language::from_extension("js").unwrap().label(),
            Language::from_extension("ts").unwrap().label()
        );
    }
}
