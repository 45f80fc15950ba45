//! Article body markup.
//!
//! Bodies are plain text with paragraphs separated by a blank line. A
//! paragraph starting with `# ` is a heading, `## ` a subheading and `> `
//! a pull quote. Everything else is an ordinary paragraph.

use serde::Serialize;

const HEADING: &str = "# ";
const SUBHEADING: &str = "## ";
const QUOTE: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading(String),
    Subheading(String),
    Quote(String),
    Paragraph(String),
}

/// Split an article body into blocks, dropping blank paragraphs.
pub fn parse_blocks(content: &str) -> Vec<ContentBlock> {
    content
        .split("\n\n")
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(classify)
        .collect()
}

fn classify(paragraph: &str) -> ContentBlock {
    if let Some(text) = paragraph.strip_prefix(HEADING) {
        ContentBlock::Heading(text.to_string())
    } else if let Some(text) = paragraph.strip_prefix(SUBHEADING) {
        ContentBlock::Subheading(text.to_string())
    } else if let Some(text) = paragraph.strip_prefix(QUOTE) {
        ContentBlock::Quote(text.to_string())
    } else {
        ContentBlock::Paragraph(paragraph.to_string())
    }
}
