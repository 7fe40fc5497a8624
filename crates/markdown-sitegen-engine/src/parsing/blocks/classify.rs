use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a trimmed block.
///
/// Checks run in a fixed order and the first match wins: heading, code,
/// quote, unordered list, ordered list. Everything else is a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if is_heading(block) {
        return BlockType::Heading;
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if block.split('\n').all(BlockQuote::is_quoted) {
        return BlockType::Quote;
    }
    if block.split('\n').all(UnorderedList::is_item) {
        return BlockType::UnorderedList;
    }
    if OrderedList::is_sequential(block.split('\n')) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

fn is_heading(block: &str) -> bool {
    Heading::has_marker(block) && !block.contains('\n')
}
