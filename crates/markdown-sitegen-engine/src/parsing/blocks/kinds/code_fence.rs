/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True if `block` both starts and ends with its own fence.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// The raw text between the fences.
    ///
    /// The opening fence line (including any info string and its newline) is
    /// dropped; the newline before the closing fence is kept. A fence on a
    /// single line yields whatever sits between the two fences.
    pub fn content(block: &str) -> Option<&str> {
        if !Self::is_fenced(block) {
            return None;
        }
        let end = block.len() - Self::BACKTICKS.len();
        let start = match block.find('\n') {
            Some(nl) => nl + 1,
            None => Self::BACKTICKS.len(),
        };
        block.get(start..end)
    }
}
