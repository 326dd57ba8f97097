//! Fetcher configuration, read from the environment.

use std::time::Duration;

use crate::error::DogBreedsError;

/// Overrides the API base URL (default `https://dog.ceo`).
pub const BASE_URL_ENV: &str = "DOGBREEDS_BASE_URL";
/// Request timeout in whole seconds. Unset means the shared client's default.
pub const TIMEOUT_ENV: &str = "DOGBREEDS_TIMEOUT_SECS";

/// Settings for building a [`DogApiBreedFetcher`](crate::DogApiBreedFetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    /// `None` reuses the process-wide HTTP client and its default timeout.
    pub timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: dogceo_api::DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl FetcherConfig {
    /// Reads `DOGBREEDS_BASE_URL` and `DOGBREEDS_TIMEOUT_SECS`.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(_) => tracing::warn!(
                    "Ignoring {}={:?}: not a number of seconds",
                    TIMEOUT_ENV,
                    raw
                ),
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Rejects a base URL that is not an absolute `http`/`https` URL, and a
    /// zero timeout.
    pub fn validate(&self) -> Result<(), DogBreedsError> {
        if self.base_url.trim().is_empty() {
            return Err(DogBreedsError::InvalidConfig(
                "base URL must not be empty".to_string(),
            ));
        }
        dogceo_api::parse_base_url(&self.base_url)
            .map_err(|e| DogBreedsError::InvalidConfig(e.to_string()))?;
        if self.timeout == Some(Duration::ZERO) {
            return Err(DogBreedsError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
