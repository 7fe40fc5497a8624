/// The structural kind of a block.
///
/// Every block classifies into exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `#` to `######` followed by a space, on a single line.
    Heading,
    /// Content between ```` ``` ```` fences. Never inline-parsed.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines start with `1. `, `2. `, ... without gaps.
    OrderedList,
    /// Anything else.
    Paragraph,
}
