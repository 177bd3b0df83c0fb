//! Error types for the worker client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the worker client
///
/// Only transport failures are errors. A response with a non-2xx status
/// is still a completed exchange and is returned as `Ok`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request/response exchange did not complete
    #[error("HTTP request failed")]
    RequestFailed(#[from] reqwest::Error),
}
