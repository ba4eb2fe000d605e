use super::kinds::Heading;

/// Returns the text of the first `# ` heading in the document, trimmed.
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find_map(|line| match Heading::parse(line.trim_start()) {
            Some((1, text)) => Some(text.trim().to_string()),
            _ => None,
        })
}
