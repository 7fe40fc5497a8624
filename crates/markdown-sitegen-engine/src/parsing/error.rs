/// Errors raised while parsing Markdown.
///
/// Every variant is fatal for the document being parsed; nothing is repaired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid markdown syntax: unmatched `{delimiter}` in {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },
    #[error("invalid heading: {0:?}")]
    InvalidHeading(String),
    #[error("invalid code block, expected ``` fences: {0:?}")]
    InvalidCodeFence(String),
    #[error("invalid quote block line: {0:?}")]
    InvalidQuoteLine(String),
}
