/// Splits a document into blocks on blank lines.
///
/// Line endings are normalized to `\n` first. Each block is trimmed and empty
/// blocks are dropped.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let normalized = markdown.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
