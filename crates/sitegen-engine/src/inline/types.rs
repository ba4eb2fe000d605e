use std::fmt;

/// The kind of an inline [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Plain text, not (yet) claimed by any inline construct.
    Text,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `![alt](url)`
    Image,
    /// `[text](url)`
    Link,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Text => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Image => "image",
            SpanKind::Link => "link",
        };
        f.write_str(name)
    }
}

/// One typed, contiguous fragment of inline text.
///
/// Spans are values: the tokenizer builds new ones and appends them, it never
/// edits a span in place. Equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Text content. For images this is the alt text, for links the anchor text.
    pub text: String,
    pub kind: SpanKind,
    /// URL for `Image` and `Link` spans; `None` for every other kind.
    pub target: Option<String>,
}

impl Span {
    /// Creates a span without a target.
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            target: None,
        }
    }

    /// Creates a span pointing at `target` (images and links).
    pub fn with_target(text: impl Into<String>, kind: SpanKind, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            target: Some(target.into()),
        }
    }

    /// Shorthand for a plain [`SpanKind::Text`] span.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Text)
    }

    /// True for spans later passes are still allowed to split.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == SpanKind::Text
    }
}
