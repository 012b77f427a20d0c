use serde_json::Value;
use thiserror::Error;

/// Errors that can occur in the paymux vendor drivers
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Validation error (a required argument is missing or invalid);
    /// raised before any network call is made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error payload reported by the vendor, passed through unmodified
    #[error("Vendor error ({status}): {payload}")]
    Vendor {
        /// HTTP status the vendor answered with
        status: u16,
        /// The vendor's error body, exactly as received
        payload: Value,
    },

    /// HTTP error from reqwest (the request never produced a vendor response)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Parse error (a vendor success payload is missing an expected field)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for vendor driver operations
pub type Result<T> = std::result::Result<T, ProviderError>;
