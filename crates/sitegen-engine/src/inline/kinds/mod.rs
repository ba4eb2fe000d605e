//! # Inline Kinds
//!
//! Inline kinds that own their syntax. Delimiters and match patterns live
//! here; the passes in `split` and `tokenizer` refer to these constants and
//! never hardcode `**` or `![`.
//!
//! ## Types
//!
//! - **`Bold`**, **`Italic`**, **`Code`**: paired delimiters
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern, rejecting a leading `!`

pub mod delimited;
pub mod image;
pub mod link;

pub use delimited::{Bold, Code, Italic};
pub use image::Image;
pub use link::Link;

/// One image or link found in a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Byte offset of the match in the scanned text.
    pub start: usize,
    /// Alt text (images) or anchor text (links).
    pub label: String,
    pub url: String,
}
