//! The `BreedFetcher` capability and its dog.ceo-backed implementation.

use std::future::Future;

use dogceo_api::Client;

use crate::config::FetcherConfig;
use crate::error::{BreedNotFoundError, DogBreedsError};

/// Looks up the sub-breeds of a breed.
///
/// Implementations report every failure as [`BreedNotFoundError`] for the
/// requested breed. On success the full list is returned in source order.
pub trait BreedFetcher {
    fn get_sub_breeds(
        &self,
        breed: &str,
    ) -> impl Future<Output = Result<Vec<String>, BreedNotFoundError>> + Send;
}

/// [`BreedFetcher`] backed by the dog.ceo HTTP API.
///
/// Issues exactly one request per lookup. Nothing is cached between calls.
#[derive(Clone)]
pub struct DogApiBreedFetcher {
    client: Client,
}

impl DogApiBreedFetcher {
    /// Creates a fetcher for the production API using the shared HTTP client.
    pub fn new() -> Result<Self, DogBreedsError> {
        Ok(Self {
            client: Client::new()?,
        })
    }

    /// Creates a fetcher against a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, DogBreedsError> {
        Ok(Self {
            client: Client::with_base_url(base_url)?,
        })
    }

    pub fn from_config(config: &FetcherConfig) -> Result<Self, DogBreedsError> {
        config.validate()?;
        let client = match config.timeout {
            Some(timeout) => Client::with_base_url_and_timeout(&config.base_url, timeout)?,
            None => Client::with_base_url(&config.base_url)?,
        };
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

impl BreedFetcher for DogApiBreedFetcher {
    async fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedNotFoundError> {
        self.client
            .get_sub_breeds(breed)
            .await
            .map_err(|e| BreedNotFoundError::collapse(breed, e))
    }
}
