use thiserror::Error;

/// Result type for gateway client operations
pub type Result<T> = std::result::Result<T, GatewayClientError>;

/// Errors that can occur when using the gateway client
#[derive(Error, Debug)]
pub enum GatewayClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API returned an `{ error }` body with a non-success status
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl GatewayClientError {
    /// True for 4xx answers, i.e. the request itself was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, GatewayClientError::ApiError { status, .. } if (400..500).contains(status))
    }
}
