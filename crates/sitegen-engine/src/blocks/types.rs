/// The kind of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other block kind matches.
    Paragraph,
    /// `#` through `######`, holding the level (1-6).
    Heading(u8),
    /// A block fenced with triple backticks.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- ` or `* `.
    UnorderedList,
    /// Line `n` starts with `n. `, counting from 1.
    OrderedList,
}

impl BlockKind {
    /// The HTML tag the block renders as.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading(1) => "h1",
            BlockKind::Heading(2) => "h2",
            BlockKind::Heading(3) => "h3",
            BlockKind::Heading(4) => "h4",
            BlockKind::Heading(5) => "h5",
            BlockKind::Heading(_) => "h6",
            BlockKind::Code => "pre",
            BlockKind::Quote => "blockquote",
            BlockKind::UnorderedList => "ul",
            BlockKind::OrderedList => "ol",
        }
    }
}
