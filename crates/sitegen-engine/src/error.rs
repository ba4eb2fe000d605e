use crate::{convert::ConvertError, html::RenderError, inline::TokenizeError};

/// Any failure on the way from markdown to an HTML string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
