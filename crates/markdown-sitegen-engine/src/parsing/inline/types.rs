use crate::html::LeafNode;

/// The kind of an inline span.
///
/// Only links and images carry a url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextType {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A contiguous run of inline content of one [`TextType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub kind: TextType,
}

impl TextNode {
    pub fn new(text: impl Into<String>, kind: TextType) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, TextType::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, TextType::Image { url: url.into() })
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, TextType::Plain)
    }

    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            TextType::Link { url } | TextType::Image { url } => Some(url),
            _ => None,
        }
    }
}

impl From<TextNode> for LeafNode {
    fn from(node: TextNode) -> Self {
        match node.kind {
            TextType::Plain => LeafNode::text(node.text),
            TextType::Bold => LeafNode::new("b", node.text),
            TextType::Italic => LeafNode::new("i", node.text),
            TextType::Code => LeafNode::new("code", node.text),
            TextType::Link { url } => LeafNode::new("a", node.text).with_attribute("href", url),
            TextType::Image { url } => LeafNode::new("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", node.text),
        }
    }
}
