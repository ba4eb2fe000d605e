use super::types::SpanKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// A text span held an odd number of the delimiter.
    #[error("Unmatched delimiter '{0}' found!")]
    UnmatchedDelimiter(String),
    /// A matched image or link could not be found again while splitting.
    #[error("invalid markdown, {kind} section not closed: {text}")]
    MalformedInlineElement { kind: SpanKind, text: String },
}
