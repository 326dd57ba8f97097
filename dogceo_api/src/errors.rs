//! Error types for the API client.

/// Errors that can occur when requesting data from the dog.ceo API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request target could not be built from the base URL and path.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The body was not JSON, or not an envelope of the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The envelope carried a status other than `success`.
    #[error("API returned status {status:?}")]
    Unsuccessful { status: String },
}
