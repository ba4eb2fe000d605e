//! # Inline Tokenizing
//!
//! Splits one run of inline markdown into a flat sequence of typed [`Span`]s.
//!
//! ## Architecture
//!
//! Tokenizing is a fixed pipeline of passes. Every pass walks the current span
//! list and only rewrites spans of kind [`SpanKind::Text`]; spans typed by an
//! earlier pass are passed through untouched and never re-scanned.
//!
//! 1. `**` delimiter pairs → `Bold`
//! 2. `_` delimiter pairs → `Italic`
//! 3. `` ` `` delimiter pairs → `Code`
//! 4. `![alt](url)` → `Image`
//! 5. `[text](url)` (not preceded by `!`) → `Link`
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: Inline kinds that own their syntax (delimiters, patterns)
//! - **`split`**: The individual passes (`split_by_delimiter`, `split_images`, `split_links`)
//! - **`tokenizer`**: `tokenize()` main entry point
//! - **`error`**: `TokenizeError`
//!
//! ## Known Limitation
//!
//! Emphasis runs before image and link extraction, so `_` or `**` inside alt
//! text or link text is split as emphasis first. `[my_link_text](url)` does not
//! come out as a single link.

pub mod error;
pub mod kinds;
pub mod split;
pub mod tokenizer;
pub mod types;

pub use error::TokenizeError;
pub use split::{
    extract_markdown_images, extract_markdown_links, split_by_delimiter, split_images, split_links,
};
pub use tokenizer::tokenize;
pub use types::{Span, SpanKind};
