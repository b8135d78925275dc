//! RMarkdown template rendering for the downstream LLM collaborator.

use crate::extractors::SymbolRecord;

/// Render the record sequence into the RMarkdown skeleton the summarization
/// step consumes: a YAML front-matter header plus one section per record.
pub fn render_rmarkdown(records: &[SymbolRecord]) -> String {
    let mut output =
        String::from("---\ntitle: 'Project Documentation'\noutput: html_document\n---\n\n");
    for record in records {
        output.push_str(&format!(
            "## {}: {}\n\n",
            capitalize(&record.kind.to_string()),
            record.name
        ));
        output.push_str(&format!("```{{r}}\n# {}\n```\n\n", record.docstring));
    }
    output
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
