use crate::parsing::inline::types::TextType;

/// Delimiter-wrapped inline styles.
///
/// Each style owns its delimiter; the parser never hardcodes `**`, `_` or `` ` ``.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Code,
}

impl Emphasis {
    /// Split order. Bold must run before italic so `**` is never read as a
    /// pair of empty spans, and earlier passes win over later ones.
    pub const PRECEDENCE: [Emphasis; 3] = [Emphasis::Bold, Emphasis::Italic, Emphasis::Code];

    pub const fn delimiter(self) -> &'static str {
        match self {
            Emphasis::Bold => "**",
            Emphasis::Italic => "_",
            Emphasis::Code => "`",
        }
    }

    pub fn text_type(self) -> TextType {
        match self {
            Emphasis::Bold => TextType::Bold,
            Emphasis::Italic => TextType::Italic,
            Emphasis::Code => TextType::Code,
        }
    }
}
