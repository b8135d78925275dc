//! Per-language extractors and the single dispatch point over all of them.
//!
//! Two strategies exist:
//! - `python` builds a real tree-sitter syntax tree and recovers true names
//!   and docstrings.
//! - everything else is best-effort pattern matching (or a bespoke
//!   summarizer for markup, CSS, and structured data). Heuristic extractors
//!   report fixed placeholder docstrings and tolerate false positives.
//!
//! Every extractor is a pure, stateless function of file content; failures
//! degrade to an empty (or fallback) record list and never escape the file.

pub mod base;

pub mod c_family;
pub mod css;
pub mod dart;
pub mod data;
pub mod go;
pub mod haskell;
pub mod jac;
pub mod javascript;
pub mod jvm;
pub mod markup;
pub mod php;
pub mod python;
pub mod ruby;
pub mod rust_lang;
pub mod scientific;
pub mod shell;
pub mod swift;

pub use base::{RecordKind, SymbolRecord};

use crate::language::Language;
use std::path::Path;

/// Dispatch one file's content to the extractor registered for its language.
///
/// The match is exhaustive over the closed [`Language`] set, so adding a
/// language without wiring an extractor fails at compile time.
pub fn extract(language: Language, path: &Path, content: &str) -> Vec<SymbolRecord> {
    match language {
        Language::Python => python::extract(content),
        Language::JavaScript => javascript::extract(content),
        Language::C | Language::Cpp | Language::CSharp | Language::ObjectiveC => {
            c_family::extract(language, content)
        }
        Language::Java | Language::Kotlin | Language::Scala => jvm::extract(language, content),
        Language::Ruby => ruby::extract(content),
        Language::Go => go::extract(content),
        Language::Php => php::extract(content),
        Language::Rust => rust_lang::extract(content),
        Language::Swift => swift::extract(content),
        Language::R | Language::Julia => scientific::extract(language, content),
        Language::Haskell => haskell::extract(content),
        Language::Shell => shell::extract(content),
        Language::Jac => jac::extract(content),
        Language::Dart => dart::extract(content),
        Language::Html | Language::Xml => markup::extract(language, content),
        Language::Css => css::extract(content),
        Language::Json | Language::Yaml => data::extract(language, path, content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::SUPPORTED_EXTENSIONS;
    use std::path::PathBuf;

    #[test]
    fn test_dispatch_routes_by_language() {
        let path = PathBuf::from("x");
        let py = extract(Language::Python, &path, "def f():\n    pass\n");
        assert_eq!(py[0].language, "Python");

        let go = extract(Language::Go, &path, "func Main() {}\n");
        assert_eq!(go[0].language, "Go");

        let css = extract(Language::Css, &path, "a { color: red; }");
        assert_eq!(css[0].kind, RecordKind::Selector);
    }

    #[test]
    fn test_every_language_dispatches_without_panicking() {
        for ext in SUPPORTED_EXTENSIONS {
            let language = Language::from_extension(ext).unwrap();
            let path = PathBuf::from(format!("sample.{ext}"));
            // Arbitrary content; extractors must tolerate anything.
            let _ = extract(language, &path, "x y z { } ( ) <tag> : -");
        }
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let path = PathBuf::from("lib.rb");
        let source = "class Foo\n  def bar\n  end\nend\n";
        assert_eq!(
            extract(Language::Ruby, &path, source),
            extract(Language::Ruby, &path, source)
        );
    }
}
