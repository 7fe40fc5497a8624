//! # Block Parsing
//!
//! Turns a whole document into block-level HTML nodes in three steps.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is cut at blank lines into
//!    trimmed, non-empty blocks
//! 2. **Classification** (`classify`): each block gets exactly one `BlockType`
//! 3. **Conversion** (`convert`): each block type extracts its literal text,
//!    hands it to the inline parser and wraps the result in its container tag
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type`
//! - **`convert`**: `block_to_html_node` and one converter per block type
//!
//! ## Key Invariants
//!
//! - Code blocks are raw zones: their content never reaches the inline parser
//! - Lists are flat; indentation before a marker is ignored

pub mod classify;
pub mod convert;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::block_to_block_type;
pub use convert::block_to_html_node;
pub use segment::markdown_to_blocks;
pub use types::BlockType;
