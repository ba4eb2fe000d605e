use std::sync::OnceLock;

use regex::Regex;

use super::InlineMatch;

/// Markdown image syntax: `![alt](url)`.
///
/// Alt text may not contain `[` or `]`, the URL may not contain `(` or `)`.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }

    /// Finds every image in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<InlineMatch> {
        Self::regex()
            .captures_iter(text)
            .map(|caps| InlineMatch {
                start: caps.get(0).map_or(0, |m| m.start()),
                label: caps[1].to_string(),
                url: caps[2].to_string(),
            })
            .collect()
    }

    /// Rebuilds the literal markdown for a match.
    pub fn markdown(alt: &str, url: &str) -> String {
        format!("![{alt}]({url})")
    }
}
