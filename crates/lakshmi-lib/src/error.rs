use thiserror::Error;

/// Convenient result alias for the Lakshmi Trails library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the delivery provider answered the send request with an
    /// error response (for example a malformed recipient address).
    #[error("delivery provider rejected the message: {message}")]
    ProviderRejected { message: String },

    /// Raised when the provider answered success but the response body could
    /// not be decoded into a receipt.
    #[error("unexpected delivery provider response: {message}")]
    UnexpectedResponse { message: String },

    /// Wrapper for HTTP client errors (connect, timeout, body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
