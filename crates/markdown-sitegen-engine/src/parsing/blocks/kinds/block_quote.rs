/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// True if the trimmed line starts with `>`.
    pub fn is_quoted(line: &str) -> bool {
        line.trim().starts_with(Self::PREFIX)
    }

    /// Strips one `>` and the whitespace around the remaining text.
    ///
    /// Returns `None` for lines that are not quoted.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::PREFIX).map(str::trim)
    }
}
