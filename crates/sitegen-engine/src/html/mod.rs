//! # HTML Node Tree
//!
//! An intermediate tree that renders itself to an HTML string.
//!
//! ## Types
//!
//! - **`HtmlNode`**: closed enum over the two node variants
//! - **`LeafNode`**: content with an optional tag and no children
//! - **`ParentNode`**: a tag wrapping one or more child nodes
//! - **`Attributes`**: insertion-ordered attribute map
//! - **`RenderOptions`**: switches for the two rendering behaviours below
//!
//! ## Rendering Rules
//!
//! - Attribute values are inserted verbatim unless
//!   [`RenderOptions::escape_attribute_values`] is set. Callers sanitize.
//! - A parent's own attributes are dropped unless
//!   [`RenderOptions::render_parent_attributes`] is set. Leaves always render
//!   theirs.
//! - Structural problems (empty leaf value, untagged or childless parent) are
//!   reported as [`RenderError`] when rendering, not when building.

pub mod attributes;
pub mod error;
pub mod node;
pub mod options;

pub use attributes::{Attributes, attributes_to_html};
pub use error::RenderError;
pub use node::{HtmlNode, LeafNode, ParentNode};
pub use options::RenderOptions;
