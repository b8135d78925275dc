//! repodoc - repository symbol extraction for LLM documentation generation.
//!
//! Given a repository URL (or an existing directory), repodoc clones it,
//! walks the tree, extracts lightweight structural metadata across ~24
//! languages, and renders an RMarkdown template for a downstream
//! summarization step. Python is parsed structurally via tree-sitter; every
//! other language is handled by best-effort pattern matching, which is
//! approximate and lossy by design.

pub mod acquire;
pub mod error;
pub mod extractors;
pub mod language;
pub mod template;
pub mod walker;

pub use acquire::{clone_repository, AcquiredRepo};
pub use error::AcquireError;
pub use extractors::{RecordKind, SymbolRecord};
pub use language::Language;
pub use template::render_rmarkdown;
pub use walker::analyze_repository;

/// Clone, analyze, and render in one call. The cloned working copy is
/// deleted before returning, whatever happens after acquisition.
pub fn document_repository(url: &str) -> Result<String, AcquireError> {
    let repo = clone_repository(url)?;
    let records = analyze_repository(repo.path());
    Ok(render_rmarkdown(&records))
}
