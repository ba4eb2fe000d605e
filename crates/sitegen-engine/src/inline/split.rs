use super::{
    error::TokenizeError,
    kinds::{Image, InlineMatch, Link},
    types::{Span, SpanKind},
};

/// Splits every text span on a paired `delimiter`.
///
/// Parts outside a delimiter pair stay [`SpanKind::Text`], parts inside become
/// `kind`. Empty parts are kept as zero-length spans, so `**bold**` yields an
/// empty text span on each side. Spans of any other kind pass through as-is.
/// An empty delimiter leaves the spans unchanged.
///
/// # Errors
/// [`TokenizeError::UnmatchedDelimiter`] if any text span holds an odd number
/// of delimiters. Nothing is returned for the other spans in that case.
pub fn split_by_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, TokenizeError> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(TokenizeError::UnmatchedDelimiter(delimiter.to_string()));
        }

        for (i, part) in parts.into_iter().enumerate() {
            let part_kind = if i % 2 == 0 { SpanKind::Text } else { kind };
            out.push(Span::new(part, part_kind));
        }
    }
    Ok(out)
}

/// Pulls `![alt](url)` images out of every text span.
///
/// # Errors
/// [`TokenizeError::MalformedInlineElement`] if a matched image cannot be
/// located again while splitting.
pub fn split_images(spans: Vec<Span>) -> Result<Vec<Span>, TokenizeError> {
    split_matched(spans, SpanKind::Image, Image::find_all, Image::markdown)
}

/// Pulls `[text](url)` links out of every text span. Images are left alone.
///
/// # Errors
/// [`TokenizeError::MalformedInlineElement`] if a matched link cannot be
/// located again while splitting.
pub fn split_links(spans: Vec<Span>) -> Result<Vec<Span>, TokenizeError> {
    split_matched(spans, SpanKind::Link, Link::find_all, Link::markdown)
}

/// Returns `(alt, url)` for each image in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    Image::find_all(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// Returns `(text, url)` for each link in `text`.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    Link::find_all(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// Shared pass for images and links.
///
/// Each match is relocated as its literal markdown in the text not yet
/// consumed, starting at the match offset. Text before a match and after the
/// last match is only emitted when non-empty.
fn split_matched(
    spans: Vec<Span>,
    kind: SpanKind,
    find_all: fn(&str) -> Vec<InlineMatch>,
    markdown: fn(&str, &str) -> String,
) -> Result<Vec<Span>, TokenizeError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let matches = find_all(&span.text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        let mut consumed = 0;
        for m in matches {
            let literal = markdown(&m.label, &m.url);
            let from = m.start.saturating_sub(consumed).min(rest.len());
            let Some(found) = rest.get(from..).and_then(|tail| tail.find(&literal)) else {
                return Err(TokenizeError::MalformedInlineElement {
                    kind,
                    text: literal,
                });
            };

            let at = from + found;
            let before = &rest[..at];
            if !before.is_empty() {
                out.push(Span::text(before));
            }
            out.push(Span::with_target(m.label, kind, m.url));

            let end = at + literal.len();
            consumed += end;
            rest = &rest[end..];
        }

        if !rest.is_empty() {
            out.push(Span::text(rest));
        }
    }
    Ok(out)
}
