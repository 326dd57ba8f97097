//! HTTP client for the dog.ceo breed API.

use std::sync::OnceLock;
use std::time::Duration;

use url::Url;

use crate::{types::Envelope, Error};

/// Production base URL of the dog.ceo API.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo";

/// Timeout applied by the shared HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide HTTP client. Clones share one connection pool.
static SHARED_HTTP: OnceLock<reqwest::Client> = OnceLock::new();

/// HTTP client for the dog.ceo API.
///
/// Clients created without an explicit timeout reuse a lazily built,
/// process-wide `reqwest::Client`. A client created with
/// [`Client::with_base_url_and_timeout`] owns its own connection pool.
#[derive(Clone)]
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointing at the production dog.ceo API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    ///
    /// Fails with [`Error::InvalidUrl`] unless `base_url` is an absolute
    /// `http` or `https` URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            base_api_url: normalize_base_url(base_url)?,
            http: shared_http()?,
        })
    }

    /// Creates a client with a custom base URL and its own request timeout.
    pub fn with_base_url_and_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        Ok(Self {
            base_api_url: normalize_base_url(base_url)?,
            http: build_http(timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::warn!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })
    }

    /// Issues a GET for `path` and decodes the response body as an [`Envelope`].
    ///
    /// The HTTP status code is only logged. dog.ceo pairs error statuses with
    /// an error envelope, so the envelope's `status` field is what callers
    /// branch on.
    async fn get_envelope(&self, path: &str) -> Result<Envelope, Error> {
        let url = self.get_url(path)?;
        tracing::debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::warn!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;
        tracing::debug!("Response status {}", status);

        Envelope::from_json(&body).inspect_err(|e| {
            let snippet = truncate_body(&body);
            tracing::debug!("{} | body: {}", e, snippet);
        })
    }

    /// Fetches the sub-breeds of `breed` from `/api/breed/{breed}/list`.
    ///
    /// `breed` is inserted into the path as given, without percent-encoding.
    pub async fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>, Error> {
        let envelope = self
            .get_envelope(format!("/api/breed/{}/list", breed).as_str())
            .await?;
        envelope.into_sub_breeds()
    }
}

/// Checks that `base_url` is an absolute `http`/`https` URL with a host.
pub fn parse_base_url(base_url: &str) -> Result<Url, Error> {
    let url = Url::parse(base_url.trim()).map_err(|e| {
        Error::InvalidUrl(format!("{:?} is not a valid base URL: {}", base_url, e))
    })?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(Error::InvalidUrl(format!(
            "{:?} must be an http or https URL",
            base_url
        )));
    }
    Ok(url)
}

fn normalize_base_url(base_url: &str) -> Result<String, Error> {
    parse_base_url(base_url).inspect_err(|e| tracing::warn!("{}", e))?;
    Ok(base_url.trim().trim_end_matches('/').to_string())
}

fn build_http(timeout: Duration) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })
}

fn shared_http() -> Result<reqwest::Client, Error> {
    if let Some(client) = SHARED_HTTP.get() {
        return Ok(client.clone());
    }
    let client = build_http(DEFAULT_TIMEOUT)?;
    Ok(SHARED_HTTP.get_or_init(|| client).clone())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
        None => body.to_string(),
    }
}
