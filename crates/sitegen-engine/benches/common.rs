// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_inline_text(size: usize) -> String {
    let base = "Plain words with **bold** and _italic_ and `code` plus an ![image](https://example.com/a.png) and a [link](https://example.com). ";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_.\n\n- Bullet point\n- Another [item](/item)\n\n1. First\n2. Second\n\n> A quote\n> spanning lines\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}
