//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the question server client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("invalid server url: {raw}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("question server responded with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while turning a certificate reply into an outcome.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CertificateError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to save certificate: {0}")]
    Io(#[from] std::io::Error),
}
