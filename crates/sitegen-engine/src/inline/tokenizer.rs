use super::{
    error::TokenizeError,
    kinds::{Bold, Code, Italic},
    split::{split_by_delimiter, split_images, split_links},
    types::Span,
};

/// Tokenizes one run of inline markdown into typed spans.
///
/// Starts from a single text span holding all of `text` and applies the
/// passes in order: bold, italic, code, images, links. See the module docs for
/// the known limitation this ordering causes.
///
/// # Errors
/// Propagates the first [`TokenizeError`] from any pass.
pub fn tokenize(text: &str) -> Result<Vec<Span>, TokenizeError> {
    let spans = vec![Span::text(text)];

    let spans = split_by_delimiter(spans, Bold::DELIMITER, Bold::KIND)?;
    log::trace!("tokenize: {} spans after bold", spans.len());
    let spans = split_by_delimiter(spans, Italic::DELIMITER, Italic::KIND)?;
    log::trace!("tokenize: {} spans after italic", spans.len());
    let spans = split_by_delimiter(spans, Code::DELIMITER, Code::KIND)?;
    log::trace!("tokenize: {} spans after code", spans.len());
    let spans = split_images(spans)?;
    log::trace!("tokenize: {} spans after images", spans.len());
    let spans = split_links(spans)?;
    log::trace!("tokenize: {} spans after links", spans.len());

    Ok(spans)
}
