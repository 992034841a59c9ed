use thiserror::Error;

pub use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures a gateway call can surface.
///
/// There is no retry or classification beyond this split; callers render
/// the message text directly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, timeout, or a body that did not decode.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status reported by the gateway, with the `detail`
    /// text when the body carried one.
    #[error("gateway returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}
