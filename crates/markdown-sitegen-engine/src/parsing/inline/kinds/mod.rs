//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `Bold` (`**`), `Italic` (`_`), `Code` (`` ` ``) and their split order
//! - **`Reference`**: `Image` (`![alt](url)`) and `Link` (`[text](url)`)
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod emphasis;
pub mod reference;

pub use emphasis::Emphasis;
pub use reference::Reference;
