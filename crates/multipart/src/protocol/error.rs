use std::io;
use thiserror::Error;

/// Errors raised when a multipart message is handed over to the `http` types.
///
/// Encoding a body never fails; these only show up when a header name or value
/// does not fit the stricter rules of [`http::HeaderName`], [`http::HeaderValue`]
/// or [`mime::Mime`].
#[derive(Error, Debug)]
pub enum MultipartError {
    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("invalid mime type: {reason}")]
    InvalidMime { reason: String },

    #[error("http error: {source}")]
    Http {
        #[from]
        source: http::Error,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl MultipartError {
    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }

    pub fn invalid_mime<S: ToString>(str: S) -> Self {
        Self::InvalidMime { reason: str.to_string() }
    }
}
