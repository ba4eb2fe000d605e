//! Block kinds that own their markers. The classifier and builder refer to
//! these and never hardcode `#` or a fence.

pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns `(level, text)` for `## text`, or `None` if the line is not a
    /// heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let text = line[level..].strip_prefix(' ')?;
        u8::try_from(level).ok().map(|level| (level, text))
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Returns the body of a fenced block. The opening fence line, including
    /// any info string, is not part of the body.
    pub fn body(block: &str) -> Option<&str> {
        if block.len() < 2 * Self::FENCE.len() {
            return None;
        }
        let inner = block
            .strip_prefix(Self::FENCE)?
            .strip_suffix(Self::FENCE)?;
        Some(match inner.split_once('\n') {
            Some((_info, body)) => body,
            None => inner,
        })
    }
}

pub struct Quote;

impl Quote {
    pub const MARKER: char = '>';

    /// Strips the quote markers and surrounding whitespace from one line.
    pub fn strip(line: &str) -> &str {
        line.trim_start_matches(Self::MARKER).trim()
    }
}

pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    pub fn item(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(*marker))
    }
}

pub struct OrderedList;

impl OrderedList {
    /// Returns the item text if `line` starts with `number. `.
    pub fn item(line: &str, number: usize) -> Option<&str> {
        line.strip_prefix(&format!("{number}. "))
    }
}
