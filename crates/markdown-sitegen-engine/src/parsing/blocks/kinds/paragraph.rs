/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters; they are the fallback when no other block
/// type matches. Their lines are joined with a single space.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_SEPARATOR: &'static str = " ";
}
