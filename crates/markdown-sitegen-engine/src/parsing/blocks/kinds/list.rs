use std::sync::OnceLock;

use regex::Regex;

/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.trim().starts_with(Self::MARKER)
    }

    /// The item text after the marker. Lines without a marker pass through.
    pub fn item_text(line: &str) -> &str {
        let line = line.trim_start();
        line.strip_prefix(Self::MARKER).unwrap_or(line)
    }
}

/// `1. item` lists.
pub struct OrderedList;

impl OrderedList {
    /// The number in a line's `N. ` marker, if it has one.
    pub fn marker_number(line: &str) -> Option<u64> {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        let marker_regex = MARKER_REGEX
            .get_or_init(|| Regex::new(r"^(\d+)\. ").expect("Invalid ordered list regex"));
        let captures = marker_regex.captures(line.trim())?;
        captures.get(1)?.as_str().parse().ok()
    }

    /// True if line `k` (0-based) carries the marker `k + 1.` for every line.
    pub fn is_sequential<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines
            .into_iter()
            .zip(1u64..)
            .all(|(line, expected)| Self::marker_number(line) == Some(expected))
    }

    /// The item text after the first space, i.e. without the `N.` marker.
    pub fn item_text(line: &str) -> &str {
        line.trim_start()
            .split_once(' ')
            .map(|(_, rest)| rest)
            .unwrap_or_default()
    }
}
