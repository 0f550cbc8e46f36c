//! Error types for the firmscout client.
//!
//! This module defines two error layers. [`ApiError`] is the taxonomy of
//! directory-service failures: the not-found case is its own variant because
//! it drives a distinct view state, while transport and server failures are
//! collapsed into generic messages at the view-controller boundary.
//! [`ScoutError`] is the centralized crate error, with a [`Result`] alias for
//! convenient signatures. All errors are implemented with the `thiserror`
//! crate.

use thiserror::Error;

/// Failures reported by the directory API client.
///
/// `NotFound` is the only case that must be distinguished at the type level:
/// it is an expected outcome rendered as an informational state, not an
/// error. Everything else is absorbed into a generic failure notice by the
/// view controllers; the precise cause is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The directory service explicitly signalled that no record exists for
    /// the requested identifier (HTTP 404).
    #[error("company not found")]
    NotFound,

    /// The request never completed: connection failure, DNS failure or
    /// timeout. The string carries the underlying cause for logging.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status other than 404.
    #[error("server returned status {status}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("invalid response payload: {0}")]
    Decode(String),
}

/// The main error type for firmscout operations.
///
/// Consolidates error conditions outside the fetch path: configuration,
/// terminal handling, theming and I/O. API failures convert automatically
/// via `#[from]` where a caller needs to propagate them.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Configuration is invalid or missing.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("theme error: {0}")]
    Theme(String),

    /// Terminal setup or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// A directory API call failed.
    #[error("api error: {0}")]
    Api(#[from] ApiError),
}

/// A specialized `Result` type for firmscout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_render_stable_messages() {
        assert_eq!(ApiError::NotFound.to_string(), "company not found");
        assert_eq!(
            ApiError::Server { status: 503 }.to_string(),
            "server returned status 503"
        );
    }

    #[test]
    fn api_error_converts_into_scout_error() {
        let err: ScoutError = ApiError::Transport("connection refused".into()).into();
        assert!(matches!(err, ScoutError::Api(ApiError::Transport(_))));
    }
}
