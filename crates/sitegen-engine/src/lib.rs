//! # sitegen-engine
//!
//! Converts a small markdown dialect into an HTML node tree and renders it.
//!
//! ```text
//! markdown ─► blocks ─► inline spans ─► leaf nodes ─► parent nodes ─► HTML
//! ```
//!
//! - [`inline`]: tokenizer producing typed [`Span`]s
//! - [`html`]: [`HtmlNode`] tree and rendering
//! - [`convert`]: span → leaf node mapping
//! - [`blocks`]: block splitting, classification and document assembly
//!
//! Everything here is pure and synchronous. Nothing touches the filesystem.

pub mod blocks;
pub mod convert;
pub mod error;
pub mod html;
pub mod inline;

// Re-export key types for easier usage
pub use blocks::{BlockKind, extract_title, markdown_to_html_node};
pub use error::{Error, Result};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, RenderError, RenderOptions};
pub use inline::{Span, SpanKind, TokenizeError, tokenize};

/// Converts a markdown document straight to an HTML string.
///
/// # Errors
/// Any tokenizer, conversion or render error.
pub fn markdown_to_html(markdown: &str, options: &RenderOptions) -> Result<String> {
    let node = markdown_to_html_node(markdown)?;
    Ok(node.to_html_with(options)?)
}
