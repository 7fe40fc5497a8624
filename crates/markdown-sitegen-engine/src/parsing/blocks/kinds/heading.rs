use std::sync::OnceLock;

use regex::Regex;

/// Heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// True if `block` opens with 1-6 `#` and a space.
    pub fn has_marker(block: &str) -> bool {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let heading_regex =
            HEADING_REGEX.get_or_init(|| Regex::new(r"^#{1,6} ").expect("Invalid heading regex"));
        heading_regex.is_match(block)
    }

    /// Number of leading `#`, without any validation.
    pub fn level(block: &str) -> usize {
        block.chars().take_while(|&c| c == Self::MARKER).count()
    }
}
