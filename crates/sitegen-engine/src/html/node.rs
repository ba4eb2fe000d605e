use std::fmt;

use super::{attributes::Attributes, error::RenderError, options::RenderOptions};

/// A node in the HTML tree: either a [`LeafNode`] or a [`ParentNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Renders with [`RenderOptions::default`].
    pub fn to_html(&self) -> Result<String, RenderError> {
        self.to_html_with(&RenderOptions::default())
    }

    pub fn to_html_with(&self, options: &RenderOptions) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html_with(options),
            HtmlNode::Parent(parent) => parent.to_html_with(options),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
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

/// Content without children.
///
/// With no tag the value is emitted as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    /// Must be non-empty to render.
    pub value: String,
    pub attributes: Option<Attributes>,
}

impl LeafNode {
    /// A leaf wrapped in `<tag>`.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: None,
        }
    }

    /// A raw text leaf with no wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: None,
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: impl Into<Attributes>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        self.to_html_with(&RenderOptions::default())
    }

    pub fn to_html_with(&self, options: &RenderOptions) -> Result<String, RenderError> {
        if self.value.is_empty() {
            return Err(RenderError::MissingValue);
        }
        let Some(tag) = non_empty(self.tag.as_deref()) else {
            return Ok(self.value.clone());
        };
        let attributes = render_attributes(self.attributes.as_ref(), options);
        Ok(format!("<{tag}{attributes}>{}</{tag}>", self.value))
    }
}

/// A tag wrapping an ordered list of children.
///
/// `tag` and `children` are optional so that a malformed parent can be built
/// and is rejected at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    /// Only rendered with [`RenderOptions::render_parent_attributes`].
    pub attributes: Option<Attributes>,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: None,
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: impl Into<Attributes>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        self.to_html_with(&RenderOptions::default())
    }

    /// Renders depth-first, failing on the first invalid node.
    pub fn to_html_with(&self, options: &RenderOptions) -> Result<String, RenderError> {
        let tag = non_empty(self.tag.as_deref()).ok_or(RenderError::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .filter(|children| !children.is_empty())
            .ok_or(RenderError::MissingChildren)?;

        let mut html = String::new();
        html.push('<');
        html.push_str(tag);
        if options.render_parent_attributes {
            html.push_str(&render_attributes(self.attributes.as_ref(), options));
        }
        html.push('>');
        for child in children {
            html.push_str(&child.to_html_with(options)?);
        }
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
        Ok(html)
    }
}

fn non_empty(tag: Option<&str>) -> Option<&str> {
    tag.filter(|tag| !tag.is_empty())
}

fn render_attributes(attributes: Option<&Attributes>, options: &RenderOptions) -> String {
    attributes
        .map(|attributes| attributes.render(options.escape_attribute_values))
        .unwrap_or_default()
}

struct OptionalDisplay<'a, T: ?Sized>(Option<&'a T>);

impl<T: fmt::Display + ?Sized> fmt::Display for OptionalDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            HtmlNode::Parent(parent) => fmt::Display::fmt(parent, f),
        }
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LeafNode({}, {}, {})",
            OptionalDisplay(self.tag.as_deref()),
            self.value,
            OptionalDisplay(self.attributes.as_ref())
        )
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParentNode({}, ", OptionalDisplay(self.tag.as_deref()))?;
        match &self.children {
            Some(children) => {
                f.write_str("[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(child, f)?;
                }
                f.write_str("]")?;
            }
            None => f.write_str("None")?,
        }
        write!(f, ", {})", OptionalDisplay(self.attributes.as_ref()))
    }
}
