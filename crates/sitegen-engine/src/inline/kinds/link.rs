use std::sync::OnceLock;

use regex::Regex;

use super::InlineMatch;

/// Markdown link syntax: `[text](url)` where the `[` is not preceded by `!`.
pub struct Link;

impl Link {
    /// `regex` has no look-behind, so the optional `!` is captured and any
    /// match that took it is an image and gets dropped.
    pub const PATTERN: &'static str = r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)";

    pub const IMAGE_PREFIX: &'static str = "!";

    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }

    /// Finds every link in `text`, left to right, skipping images.
    pub fn find_all(text: &str) -> Vec<InlineMatch> {
        Self::regex()
            .captures_iter(text)
            .filter(|caps| &caps[1] != Self::IMAGE_PREFIX)
            .map(|caps| InlineMatch {
                start: caps.get(0).map_or(0, |m| m.start()),
                label: caps[2].to_string(),
                url: caps[3].to_string(),
            })
            .collect()
    }

    /// Rebuilds the literal markdown for a match.
    pub fn markdown(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }
}
