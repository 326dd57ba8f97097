//! In-memory `BreedFetcher` for tests and offline lookups.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{BreedNotFoundError, DogBreedsError};
use crate::fetcher::BreedFetcher;

/// [`BreedFetcher`] that answers from a fixed breed table.
///
/// A breed absent from the table is reported as not found. A breed present
/// with an empty list yields an empty list.
#[derive(Debug, Clone, Default)]
pub struct StaticBreedFetcher {
    breeds: HashMap<String, Vec<String>>,
}

impl StaticBreedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breed<I, S>(mut self, breed: impl Into<String>, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(breed, sub_breeds);
        self
    }

    /// Inserts or replaces the sub-breeds of `breed`.
    pub fn insert<I, S>(&mut self, breed: impl Into<String>, sub_breeds: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breeds.insert(
            breed.into(),
            sub_breeds.into_iter().map(Into::into).collect(),
        );
    }

    /// Builds a table from JSON.
    ///
    /// Accepts either a bare object mapping breed to sub-breed array, or the
    /// full `/api/breeds/list/all` response whose `message` holds that object.
    pub fn from_json(json: &str) -> Result<Self, DogBreedsError> {
        let value: Value = serde_json::from_str(json)?;
        let table = match value {
            Value::Object(mut obj)
                if obj.get("status").is_some_and(Value::is_string)
                    && obj.get("message").is_some_and(Value::is_object) =>
            {
                obj.remove("message").unwrap_or(Value::Null)
            }
            other => other,
        };
        let breeds: HashMap<String, Vec<String>> = serde_json::from_value(table)?;
        Ok(Self { breeds })
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for StaticBreedFetcher {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self {
            breeds: iter.into_iter().collect(),
        }
    }
}

impl BreedFetcher for StaticBreedFetcher {
    async fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedNotFoundError> {
        self.breeds
            .get(breed)
            .cloned()
            .ok_or_else(|| BreedNotFoundError::new(breed))
    }
}
