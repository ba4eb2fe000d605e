//! End-to-end conversion from markdown source to HTML strings.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use sitegen_engine::{
    Attributes, Error, HtmlNode, LeafNode, ParentNode, RenderError, RenderOptions, SpanKind,
    TokenizeError, blocks::block_to_html_node, convert::span_to_html_node, extract_title,
    markdown_to_html, markdown_to_html_node, tokenize,
};

fn render(md: &str) -> String {
    markdown_to_html(md, &RenderOptions::default()).unwrap()
}

#[test]
fn full_page() {
    let md = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

- You can spend years studying the legendarium
- The writing is `timeless`

1. Gandalf
2. Bilbo

Read more on [Wikipedia](https://en.wikipedia.org/wiki/Tolkien).
";
    assert_snapshot!(render(md), @r#"<div><h1>Tolkien Fan Club</h1><p><img src="/images/tolkien.png" alt="JRR Tolkien sitting">JRR Tolkien sitting</img></p><p>Here's the deal, <b>I like Tolkien</b>.</p><blockquote>"I am in fact a Hobbit in all but size."  -- J.R.R. Tolkien</blockquote><h2>Reasons I like Tolkien</h2><ul><li>You can spend years studying the legendarium</li><li>The writing is <code>timeless</code></li></ul><ol><li>Gandalf</li><li>Bilbo</li></ol><p>Read more on <a href="https://en.wikipedia.org/wiki/Tolkien">Wikipedia</a>.</p></div>"#);
}

#[test]
fn title_is_first_h1() {
    assert_eq!(
        extract_title("## Not this\n\n# Tolkien Fan Club\n\ntext"),
        Some("Tolkien Fan Club".to_string())
    );
}

#[test]
fn tokens_map_onto_leaves() {
    let spans = tokenize("a **b** [c](/d)").unwrap();
    let kinds: Vec<SpanKind> = spans.iter().map(|span| span.kind).collect();
    assert_eq!(
        kinds,
        vec![SpanKind::Text, SpanKind::Bold, SpanKind::Text, SpanKind::Link]
    );

    let html: String = spans
        .iter()
        .map(|span| span_to_html_node(span).unwrap().to_html().unwrap())
        .collect();
    assert_eq!(html, r#"a <b>b</b> <a href="/d">c</a>"#);
}

#[test]
fn single_block() {
    let node = block_to_html_node("### Small _heading_").unwrap();
    assert_snapshot!(node.to_html().unwrap(), @"<h3>Small <i>heading</i></h3>");
}

#[test]
fn hand_built_tree() {
    let tree = ParentNode::new(
        "section",
        vec![
            LeafNode::new("h2", "Links").into(),
            ParentNode::new(
                "p",
                vec![
                    LeafNode::text("Visit ").into(),
                    LeafNode::new("a", "boot.dev")
                        .with_attributes(
                            Attributes::new()
                                .with("href", "https://boot.dev")
                                .with("target", "_blank"),
                        )
                        .into(),
                ],
            )
            .into(),
        ],
    )
    .with_attributes([("class", "links")]);

    assert_snapshot!(
        tree.to_html().unwrap(),
        @r#"<section><h2>Links</h2><p>Visit <a href="https://boot.dev" target="_blank">boot.dev</a></p></section>"#
    );

    let options = RenderOptions {
        render_parent_attributes: true,
        ..RenderOptions::default()
    };
    assert_snapshot!(
        tree.to_html_with(&options).unwrap(),
        @r#"<section class="links"><h2>Links</h2><p>Visit <a href="https://boot.dev" target="_blank">boot.dev</a></p></section>"#
    );
}

#[test]
fn escaping_option_reaches_generated_links() {
    let options = RenderOptions {
        escape_attribute_values: true,
        ..RenderOptions::default()
    };
    let html = markdown_to_html("[q](/search?a=1&b=2)", &options).unwrap();
    assert_eq!(html, r#"<div><p><a href="/search?a=1&amp;b=2">q</a></p></div>"#);
}

#[test]
fn errors_surface_through_the_pipeline() {
    assert_eq!(
        markdown_to_html("a `tick", &RenderOptions::default()),
        Err(Error::Tokenize(TokenizeError::UnmatchedDelimiter(
            "`".to_string()
        )))
    );
    assert_eq!(
        markdown_to_html("", &RenderOptions::default()),
        Err(Error::Render(RenderError::MissingChildren))
    );
    assert_eq!(
        markdown_to_html("****", &RenderOptions::default()),
        Err(Error::Render(RenderError::MissingValue))
    );
}

#[test]
fn error_messages() {
    let err = markdown_to_html_node("**x").unwrap_err();
    assert_eq!(err.to_string(), "Unmatched delimiter '**' found!");

    let err = HtmlNode::from(ParentNode::new("div", vec![])).to_html().unwrap_err();
    assert_eq!(err.to_string(), "ParentNode must have children");
}

#[test]
fn render_is_repeatable() {
    let md = "Some **bold** and _italic_\n\n- a\n- b";
    assert_eq!(render(md), render(md));
}

#[test]
fn nodes_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HtmlNode>();
    assert_send_sync::<RenderOptions>();
    assert_send_sync::<sitegen_engine::Span>();
}
