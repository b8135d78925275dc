//! Structured-data summarizer for JSON and YAML (.json, .yml, .yaml).
//!
//! A top-level mapping yields one record listing its keys. Invalid documents
//! and valid-but-non-mapping documents (arrays, scalars) fall back to a
//! single "non-structured text" record; nothing here ever propagates an
//! error past the file boundary.

use crate::extractors::base::{RecordKind, SymbolRecord, NON_STRUCTURED_TEXT};
use crate::language::Language;
use std::path::Path;

pub fn extract(language: Language, path: &Path, content: &str) -> Vec<SymbolRecord> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("data")
        .to_string();

    let keys = match language {
        Language::Json => json_keys(content),
        Language::Yaml => yaml_keys(content),
        _ => None,
    };

    match keys {
        Some(keys) => vec![SymbolRecord::new(
            language,
            RecordKind::DataKeys,
            name,
            format!("Top-level keys: {}", keys.join(", ")),
        )],
        None => vec![SymbolRecord::new(
            language,
            RecordKind::Text,
            name,
            NON_STRUCTURED_TEXT,
        )],
    }
}

fn json_keys(content: &str) -> Option<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| tracing::debug!("invalid JSON: {e}"))
        .ok()?;
    let object = value.as_object()?;
    Some(object.keys().cloned().collect())
}

fn yaml_keys(content: &str) -> Option<Vec<String>> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| tracing::debug!("invalid YAML: {e}"))
        .ok()?;
    let mapping = value.as_mapping()?;
    Some(
        mapping
            .keys()
            .map(|key| match key {
                serde_yaml::Value::String(s) => s.clone(),
                other => serde_yaml::to_string(other)
                    .unwrap_or_default()
                    .trim()
                    .to_string(),
            })
            .collect(),
    )
}
