//! # Inline Parsing
//!
//! Cursor-based scanning of inline Markdown into typed spans.
//!
//! ## Architecture
//!
//! Inline parsing runs over the literal content of one block (a heading's
//! text, a paragraph's joined lines, a single list item). Code blocks never
//! reach it.
//!
//! The parser applies a fixed sequence of passes over a list of
//! [`TextNode`]s, each pass splitting only the nodes that are still plain:
//! bold, italic, code, then images, then links. Every construct is located by
//! position with a [`cursor::Cursor`], so repeated identical constructs are
//! split exactly where they occur.
//!
//! ## Modules
//!
//! - **`types`**: `TextNode` and the `TextType` sum type
//! - **`kinds`**: delimiter-owning types (`Emphasis`, `Reference`)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `text_to_text_nodes()` and the individual split passes

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::text_to_text_nodes;
pub use types::{TextNode, TextType};
