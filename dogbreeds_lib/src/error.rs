//! Error types for the library layer.

use std::fmt;

/// The one error a [`BreedFetcher`](crate::BreedFetcher) reports.
///
/// Transport failures, malformed bodies and unsuccessful API statuses are all
/// reported as this error. It carries the requested breed and nothing else.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Breed not found: {breed}")]
pub struct BreedNotFoundError {
    breed: String,
}

impl BreedNotFoundError {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
        }
    }

    /// The breed identifier that was requested.
    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// Replaces any API failure with a `BreedNotFoundError` for `breed`.
    ///
    /// The cause is logged and then dropped.
    pub(crate) fn collapse(breed: &str, cause: dogceo_api::Error) -> Self {
        tracing::debug!("Reporting breed {:?} as not found: {}", breed, cause);
        Self::new(breed)
    }
}

/// Errors from building fetchers, distinct from the lookup error itself.
#[derive(Debug)]
pub enum DogBreedsError {
    /// The underlying API client could not be constructed.
    Api(dogceo_api::Error),
    /// A fetcher configuration value was rejected.
    InvalidConfig(String),
    /// JSON for an in-memory breed table could not be read.
    Serialization(serde_json::Error),
}

impl fmt::Display for DogBreedsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API client error: {}", e),
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for DogBreedsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<dogceo_api::Error> for DogBreedsError {
    fn from(e: dogceo_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for DogBreedsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
