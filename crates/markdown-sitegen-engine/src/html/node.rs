use super::{Attributes, Render, RenderError};

/// An HTML element with literal content and no children.
///
/// Without a tag the value renders as raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    /// Required for rendering.
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    /// A tagged leaf, e.g. `<b>value</b>`.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// An untagged leaf that renders `value` verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}

impl Render for LeafNode {
    fn render(&self) -> Result<String, RenderError> {
        let value = self.value.as_deref().ok_or(RenderError::MissingValue)?;
        match &self.tag {
            None => Ok(value.to_string()),
            Some(tag) => Ok(format!(
                "<{tag}{}>{value}</{tag}>",
                self.attributes.to_html()
            )),
        }
    }
}

/// An HTML element whose content is the concatenation of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    /// Required for rendering.
    pub tag: Option<String>,
    /// Required for rendering; an empty list is fine.
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// The children, or an empty slice when they are absent.
    pub fn children(&self) -> &[HtmlNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

impl Render for ParentNode {
    fn render(&self) -> Result<String, RenderError> {
        let tag = self.tag.as_deref().ok_or(RenderError::MissingTag)?;
        let children = self
            .children
            .as_ref()
            .ok_or_else(|| RenderError::MissingChildren {
                tag: tag.to_string(),
            })?;

        let mut out = format!("<{tag}{}>", self.attributes.to_html());
        for child in children {
            out.push_str(&child.render()?);
        }
        out.push_str(&format!("</{tag}>"));
        Ok(out)
    }
}

/// Either kind of node, so parents can own a mixed list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }
}

impl Render for HtmlNode {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render(),
            HtmlNode::Parent(parent) => parent.render(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}
