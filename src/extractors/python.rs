//! Python extractor - the one structural-parse extractor.
//!
//! Builds a real tree-sitter syntax tree and walks every node, emitting one
//! record per function or class definition with its true name and declared
//! docstring. Syntax errors degrade to an empty result for the file; they
//! never abort the surrounding repository walk.

use crate::extractors::base::{RecordKind, SymbolRecord, NO_DOCSTRING};
use crate::language::Language;
use tree_sitter::{Node, Parser};

/// Extract function/class records from Python source.
pub fn extract(content: &str) -> Vec<SymbolRecord> {
    let mut parser = Parser::new();
    if parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .is_err()
    {
        tracing::debug!("failed to configure Python parser");
        return Vec::new();
    }

    let Some(tree) = parser.parse(content, None) else {
        tracing::debug!("Python parse returned no tree");
        return Vec::new();
    };

    // The reference behavior is an all-or-nothing parse: a file with syntax
    // errors contributes nothing rather than a partial record set.
    if tree.root_node().has_error() {
        tracing::debug!("Python source has syntax errors, skipping file");
        return Vec::new();
    }

    let mut records = Vec::new();
    traverse(tree.root_node(), content.as_bytes(), &mut records);
    records
}

fn traverse(node: Node, source: &[u8], records: &mut Vec<SymbolRecord>) {
    match node.kind() {
        "function_definition" => {
            if let Some(record) = definition_record(node, source, RecordKind::Function) {
                records.push(record);
            }
        }
        "class_definition" => {
            if let Some(record) = definition_record(node, source, RecordKind::Class) {
                records.push(record);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        traverse(child, source, records);
    }
}

fn definition_record(node: Node, source: &[u8], kind: RecordKind) -> Option<SymbolRecord> {
    let name_node = node.child_by_field_name("name")?;
    let name = node_text(&name_node, source);
    let docstring = extract_docstring(node, source).unwrap_or_else(|| NO_DOCSTRING.to_string());
    Some(SymbolRecord::new(Language::Python, kind, name, docstring))
}

/// Python docstrings are the first string expression in the definition body.
fn extract_docstring(node: Node, source: &[u8]) -> Option<String> {
    let body = node.child_by_field_name("body")?;
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        if child.kind() == "expression_statement" {
            let mut expr_cursor = child.walk();
            for expr_child in child.children(&mut expr_cursor) {
                if expr_child.kind() == "string" {
                    let raw = node_text(&expr_child, source);
                    return Some(strip_string_delimiters(&raw).trim().to_string());
                }
            }
        }
        // Anything else before a string means there is no docstring.
        if child.kind() != "comment" {
            break;
        }
    }
    None
}

fn node_text(node: &Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or_default().to_string()
}

/// Strip triple, double, or single quote delimiters from a Python string,
/// including any prefix characters (r, b, f, u).
fn strip_string_delimiters(s: &str) -> String {
    let trimmed = s.trim_start_matches(|c: char| matches!(c, 'r' | 'b' | 'f' | 'u' | 'R' | 'B' | 'F' | 'U'));
    let delimiters = [("\"\"\"", 3), ("'''", 3), ("\"", 1), ("'", 1)];
    for (delimiter, strip_count) in &delimiters {
        if trimmed.starts_with(delimiter)
            && trimmed.ends_with(delimiter)
            && trimmed.len() >= strip_count * 2
        {
            return trimmed[*strip_count..trimmed.len() - strip_count].to_string();
        }
    }
    trimmed.to_string()
}
