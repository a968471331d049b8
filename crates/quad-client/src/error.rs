// Client-side error taxonomy

use quad_core::ValidationErrors;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Draft failed local validation; no request was issued
    #[error("Validation failed: {0}")]
    Invalid(#[from] ValidationErrors),

    /// Transport-level failure talking to the API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The operation needs a configured backend and cannot degrade
    #[error("No API base URL configured")]
    Unconfigured,
}
