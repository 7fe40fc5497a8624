pub mod html;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlNode, LeafNode, ParentNode, Render, RenderError};
pub use parsing::{
    ParseError,
    blocks::BlockType,
    inline::{TextNode, TextType},
    markdown_to_html_node,
};
pub use site::SiteError;

/// Any failure while turning Markdown into an HTML string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Renders a Markdown document to an HTML string.
///
/// The output is wrapped in a single `<div>`. Fails on unbalanced inline
/// delimiters, invalid headings and malformed code or quote blocks; no
/// partial output is produced.
pub fn render_document(markdown: &str) -> Result<String, Error> {
    let root = markdown_to_html_node(markdown)?;
    Ok(root.render()?)
}

/// Splits one run of inline Markdown into typed spans.
pub fn extract_inline_spans(text: &str) -> Result<Vec<TextNode>, ParseError> {
    parsing::inline::text_to_text_nodes(text)
}
