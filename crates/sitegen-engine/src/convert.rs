//! Maps typed inline spans onto leaf nodes.
//!
//! | kind   | tag    | value | attributes          |
//! |--------|--------|-------|---------------------|
//! | Text   | none   | text  |                     |
//! | Bold   | `b`    | text  |                     |
//! | Italic | `i`    | text  |                     |
//! | Code   | `code` | text  |                     |
//! | Link   | `a`    | text  | `href`              |
//! | Image  | `img`  | alt   | `src`, `alt`        |

use crate::{
    error::Result,
    html::{Attributes, HtmlNode, LeafNode},
    inline::{Span, SpanKind, tokenize},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("{kind} span has no target")]
    MissingTarget { kind: SpanKind },
}

/// Builds the leaf node for one span.
///
/// Images keep their alt text as the leaf value, since a leaf cannot render
/// without one.
///
/// # Errors
/// [`ConvertError::MissingTarget`] for a link or image without a URL.
pub fn span_to_html_node(span: &Span) -> std::result::Result<HtmlNode, ConvertError> {
    let leaf = match span.kind {
        SpanKind::Text => LeafNode::text(span.text.as_str()),
        SpanKind::Bold => LeafNode::new("b", span.text.as_str()),
        SpanKind::Italic => LeafNode::new("i", span.text.as_str()),
        SpanKind::Code => LeafNode::new("code", span.text.as_str()),
        SpanKind::Link => LeafNode::new("a", span.text.as_str())
            .with_attributes(Attributes::new().with("href", target(span)?)),
        SpanKind::Image => LeafNode::new("img", span.text.as_str()).with_attributes(
            Attributes::new()
                .with("src", target(span)?)
                .with("alt", span.text.as_str()),
        ),
    };
    Ok(leaf.into())
}

/// Tokenizes `text` and maps every span to a leaf node.
///
/// Zero-length text spans left over from delimiter splitting are dropped;
/// they carry nothing and would fail to render.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    let mut children = Vec::new();
    for span in tokenize(text)? {
        if span.is_text() && span.text.is_empty() {
            continue;
        }
        children.push(span_to_html_node(&span)?);
    }
    Ok(children)
}

fn target(span: &Span) -> std::result::Result<&str, ConvertError> {
    span.target
        .as_deref()
        .ok_or(ConvertError::MissingTarget { kind: span.kind })
}
