//! Library layer for dogbreeds: the `BreedFetcher` capability and its backends.
//!
//! Wraps the `dogceo_api` client so that every failure, whether transport,
//! parsing, or an unsuccessful API status, surfaces as a single
//! [`BreedNotFoundError`] carrying the requested breed.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod static_fetcher;

pub use dogceo_api;

pub use config::FetcherConfig;
pub use error::{BreedNotFoundError, DogBreedsError};
pub use fetcher::{BreedFetcher, DogApiBreedFetcher};
pub use static_fetcher::StaticBreedFetcher;
