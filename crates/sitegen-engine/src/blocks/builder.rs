use crate::{
    convert::text_to_children,
    error::Result,
    html::{HtmlNode, LeafNode, ParentNode},
};

use super::{
    classify::block_to_block_type,
    kinds::{CodeFence, Heading, OrderedList, Quote, UnorderedList},
    split::markdown_to_blocks,
    types::BlockKind,
};

/// Converts a whole markdown document into a `<div>` holding one node per
/// block.
///
/// An empty document still succeeds; the resulting `<div>` has no children and
/// fails with `MissingChildren` when rendered.
///
/// # Errors
/// The first tokenizer or conversion error from any block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = markdown_to_blocks(markdown);
    log::debug!("assembling document from {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(String::as_str)
        .map(block_to_html_node)
        .collect::<Result<Vec<_>>>()?;
    Ok(ParentNode::new("div", children).into())
}

/// Converts a single block into its parent node.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode> {
    let kind = block_to_block_type(block);
    let node = match kind {
        BlockKind::Paragraph => {
            let text = block.lines().collect::<Vec<_>>().join(" ");
            ParentNode::new(kind.tag(), text_to_children(&text)?)
        }
        BlockKind::Heading(_) => {
            let text = Heading::parse(block).map_or(block, |(_, text)| text);
            ParentNode::new(kind.tag(), text_to_children(text)?)
        }
        BlockKind::Code => {
            let body = CodeFence::body(block).unwrap_or_default();
            let code = LeafNode::new("code", html_escape::encode_text(body));
            ParentNode::new(kind.tag(), vec![code.into()])
        }
        BlockKind::Quote => {
            let text = block.lines().map(Quote::strip).collect::<Vec<_>>().join(" ");
            ParentNode::new(kind.tag(), text_to_children(&text)?)
        }
        BlockKind::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(UnorderedList::item(line).unwrap_or(line)))
                .collect::<Result<Vec<_>>>()?;
            ParentNode::new(kind.tag(), items)
        }
        BlockKind::OrderedList => {
            let items = block
                .lines()
                .enumerate()
                .map(|(i, line)| list_item(OrderedList::item(line, i + 1).unwrap_or(line)))
                .collect::<Result<Vec<_>>>()?;
            ParentNode::new(kind.tag(), items)
        }
    };
    Ok(node.into())
}

fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(ParentNode::new("li", text_to_children(text)?).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, html::RenderError, inline::TokenizeError};
    use pretty_assertions::assert_eq;

    fn render(md: &str) -> String {
        markdown_to_html_node(md).unwrap().to_html().unwrap()
    }

    #[test]
    fn paragraphs() {
        let md = "This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here
";
        assert_eq!(
            render(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn code_block_is_raw() {
        let md = "```
This is text that _should_ remain
the **same** even with inline stuff
```";
        assert_eq!(
            render(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn code_block_is_escaped() {
        assert_eq!(
            render("```\n<b>&</b>\n```"),
            "<div><pre><code>&lt;b&gt;&amp;&lt;/b&gt;\n</code></pre></div>"
        );
    }

    #[test]
    fn headings() {
        assert_eq!(
            render("# Top\n\n### Third with `code`"),
            "<div><h1>Top</h1><h3>Third with <code>code</code></h3></div>"
        );
    }

    #[test]
    fn quote() {
        assert_eq!(
            render("> quoted\n> _lines_"),
            "<div><blockquote>quoted <i>lines</i></blockquote></div>"
        );
    }

    #[test]
    fn lists() {
        assert_eq!(
            render("- one\n- **two**\n\n1. first\n2. [second](/2)"),
            r#"<div><ul><li>one</li><li><b>two</b></li></ul><ol><li>first</li><li><a href="/2">second</a></li></ol></div>"#
        );
    }

    #[test]
    fn tokenizer_errors_propagate() {
        assert_eq!(
            markdown_to_html_node("fine\n\nbroken **bold"),
            Err(Error::Tokenize(TokenizeError::UnmatchedDelimiter(
                "**".to_string()
            )))
        );
    }

    #[test]
    fn empty_document_fails_to_render() {
        let node = markdown_to_html_node("").unwrap();
        assert_eq!(node.to_html(), Err(RenderError::MissingChildren));
    }
}
