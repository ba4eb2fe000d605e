//! # Block Assembly
//!
//! Turns a whole markdown document into one `<div>` [`ParentNode`](crate::html::ParentNode).
//!
//! ## Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into
//!    trimmed, non-empty blocks
//! 2. **Classification** (`classify`): each block is classified on local
//!    facts only into a [`BlockKind`]
//! 3. **Building** (`builder`): each block becomes a parent node whose
//!    children come from the inline tokenizer (code blocks excepted)
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block markers (`#`, `>`, `- `, fences)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type`
//! - **`builder`**: `markdown_to_html_node`
//! - **`title`**: `extract_title`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - A block is classified by its own lines, never by its neighbours

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod title;
pub mod types;

pub use builder::{block_to_html_node, markdown_to_html_node};
pub use classify::block_to_block_type;
pub use split::markdown_to_blocks;
pub use title::extract_title;
pub use types::BlockKind;
