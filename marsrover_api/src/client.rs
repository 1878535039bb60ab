//! HTTP client for the NASA Mars Rover Photos API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::PhotoQuery,
    types::{Manifest, ManifestResponse, Photo, PhotosResponse},
    Error,
};

/// Base URL for the production NASA API.
const BASE_API_URL: &str = "https://api.nasa.gov/mars-photos/api/v1";

/// Public demo key accepted by the NASA API, with tight rate limits.
const DEMO_KEY: &str = "DEMO_KEY";

/// HTTP client for the NASA Mars Rover Photos API.
///
/// Holds an API key and a base URL, both immutable after construction, so a
/// single instance can serve concurrent calls. Each request builds a fresh
/// `reqwest::Client` with the configured timeout.
pub struct Client {
    api_key: String,
    base_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new("")
    }
}

impl Client {
    /// Creates a new client pointing at the production NASA API.
    ///
    /// An empty key substitutes the public `DEMO_KEY`.
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, BASE_API_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock. An empty base URL substitutes the production endpoint.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        let api_key = if api_key.is_empty() { DEMO_KEY } else { api_key };
        let base_url = if base_url.is_empty() {
            BASE_API_URL
        } else {
            base_url
        };
        Self {
            api_key: api_key.to_string(),
            base_api_url: base_url.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the per-request timeout. Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The API key in use after defaulting.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The base URL in use after defaulting.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL: {}", e);
            Error::Url(e)
        })?;
        url.path_segments_mut()
            // cannot-be-a-base URLs (e.g. `data:`) have no path to extend
            .map_err(|_| Error::Url(url::ParseError::RelativeUrlWithoutBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let body = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, body);
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::Decode(e)
        })?;

        Ok(parsed)
    }

    /// Fetches a rover's mission manifest.
    pub async fn get_manifest(&self, rover: &str) -> Result<Manifest, Error> {
        let mut url = self.get_url(&["manifests", rover])?;
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        let resp = self.get::<ManifestResponse>(url).await?;
        Ok(resp.photo_manifest)
    }

    /// Fetches photos taken by a rover on a particular martian sol.
    pub async fn get_photos_by_sol(
        &self,
        rover: &str,
        sol: u32,
        query: &PhotoQuery,
    ) -> Result<Vec<Photo>, Error> {
        let mut url = self.get_url(&["rovers", rover, "photos"])?;
        url.query_pairs_mut().append_pair("sol", &sol.to_string());
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        let resp = self.get::<PhotosResponse>(url).await?;
        Ok(resp.photos)
    }

    /// Fetches photos taken by a rover on a particular earth date.
    ///
    /// `date` is an ISO-8601 calendar date (`YYYY-MM-DD`), passed through to
    /// the API unvalidated.
    pub async fn get_photos_by_earth_date(
        &self,
        rover: &str,
        date: &str,
        query: &PhotoQuery,
    ) -> Result<Vec<Photo>, Error> {
        let mut url = self.get_url(&["rovers", rover, "photos"])?;
        url.query_pairs_mut().append_pair("earth_date", date);
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        let resp = self.get::<PhotosResponse>(url).await?;
        Ok(resp.photos)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // back off to a char boundary so multi-byte characters never split
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
