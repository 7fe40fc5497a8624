pub mod blocks;
pub mod error;
pub mod inline;

use crate::html::{HtmlNode, ParentNode};

pub use error::ParseError;

/// Tag of the root container every document is wrapped in.
pub const DOCUMENT_TAG: &str = "div";

/// Parses a Markdown document into a single root node.
///
/// Blocks are converted in source order and wrapped in a [`DOCUMENT_TAG`]
/// element. An empty document yields a root with no children.
pub fn markdown_to_html_node(markdown: &str) -> Result<ParentNode, ParseError> {
    let children = blocks::markdown_to_blocks(markdown)
        .iter()
        .map(|block| blocks::block_to_html_node(block).map(HtmlNode::Parent))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(DOCUMENT_TAG, children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Render;
    use insta::assert_snapshot;

    #[test]
    fn empty_document_has_empty_root() {
        let root = markdown_to_html_node("").unwrap();
        assert!(root.children().is_empty());
        assert_eq!(root.render().unwrap(), "<div></div>");
    }

    #[test]
    fn blocks_keep_source_order() {
        let root = markdown_to_html_node("# Title\n\n> quote\n\n- item\n\ntext").unwrap();
        let tags: Vec<_> = root.children().iter().map(HtmlNode::tag).collect();
        assert_eq!(tags, vec![Some("h1"), Some("blockquote"), Some("ul"), Some("p")]);
    }

    #[test]
    fn paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        let html = markdown_to_html_node(md).unwrap().render().unwrap();
        assert_snapshot!(
            html,
            @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn error_in_any_block_fails_the_document() {
        let err = markdown_to_html_node("fine\n\n**broken\n\nalso fine").unwrap_err();
        assert!(matches!(err, ParseError::UnbalancedDelimiter { .. }));
    }
}
