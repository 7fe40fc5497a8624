//! # HTML Node Model
//!
//! A small tree of renderable HTML elements. Parsed Markdown is converted into
//! this tree, then serialized to a string with [`Render::render`].
//!
//! ## Modules
//!
//! - **`attributes`**: `Attributes`, an insertion-ordered attribute list
//! - **`node`**: `LeafNode`, `ParentNode` and the `HtmlNode` enum over both
//!
//! ## Serialization
//!
//! Nothing is escaped. Attribute values and text content are emitted verbatim,
//! so callers must hand in content that is already safe to embed.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};

/// Errors raised when serializing a structurally incomplete node.
///
/// These indicate a construction bug; nodes built by the parser never
/// trigger them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node has no value")]
    MissingValue,
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
}

/// Anything that serializes to an HTML string.
pub trait Render {
    fn render(&self) -> Result<String, RenderError>;
}
