use crate::{
    html::{HtmlNode, LeafNode, ParentNode},
    parsing::{error::ParseError, inline::text_to_text_nodes},
};

use super::{
    classify::block_to_block_type,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockType,
};

/// Converts one trimmed block into its HTML node.
pub fn block_to_html_node(block: &str) -> Result<ParentNode, ParseError> {
    match block_to_block_type(block) {
        BlockType::Heading => heading_to_html_node(block),
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => quote_to_html_node(block),
        BlockType::UnorderedList => unordered_list_to_html_node(block),
        BlockType::OrderedList => ordered_list_to_html_node(block),
        BlockType::Paragraph => paragraph_to_html_node(block),
    }
}

/// Inline-parses `text` into leaf nodes.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    let nodes = text_to_text_nodes(text)?;
    Ok(nodes
        .into_iter()
        .map(|node| HtmlNode::Leaf(LeafNode::from(node)))
        .collect())
}

pub fn heading_to_html_node(block: &str) -> Result<ParentNode, ParseError> {
    let level = Heading::level(block);
    if level == 0 || level > Heading::MAX_LEVEL {
        return Err(ParseError::InvalidHeading(block.to_string()));
    }
    let text = match block[level..].strip_prefix(' ') {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ParseError::InvalidHeading(block.to_string())),
    };
    Ok(ParentNode::new(format!("h{level}"), text_to_children(text)?))
}

/// Code content is wrapped as-is; emphasis markers inside stay literal.
pub fn code_to_html_node(block: &str) -> Result<ParentNode, ParseError> {
    let text =
        CodeFence::content(block).ok_or_else(|| ParseError::InvalidCodeFence(block.to_string()))?;
    let code = ParentNode::new("code", vec![LeafNode::text(text).into()]);
    Ok(ParentNode::new("pre", vec![code.into()]))
}

pub fn quote_to_html_node(block: &str) -> Result<ParentNode, ParseError> {
    let lines = block
        .split('\n')
        .map(|line| {
            BlockQuote::strip_prefix(line)
                .ok_or_else(|| ParseError::InvalidQuoteLine(line.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let text = lines.join(" ");
    Ok(ParentNode::new("blockquote", text_to_children(&text)?))
}

pub fn unordered_list_to_html_node(block: &str) -> Result<ParentNode, ParseError> {
    let items = block
        .split('\n')
        .map(|line| list_item(UnorderedList::item_text(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("ul", items))
}

pub fn ordered_list_to_html_node(block: &str) -> Result<ParentNode, ParseError> {
    let items = block
        .split('\n')
        .map(|line| list_item(OrderedList::item_text(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode, ParseError> {
    Ok(ParentNode::new("li", text_to_children(text)?).into())
}

pub fn paragraph_to_html_node(block: &str) -> Result<ParentNode, ParseError> {
    let lines: Vec<&str> = block.split('\n').collect();
    let text = lines.join(Paragraph::LINE_SEPARATOR);
    Ok(ParentNode::new("p", text_to_children(&text)?))
}
