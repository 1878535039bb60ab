//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request never completed (connection failure or timeout).
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    /// The API returned a non-success status with the raw body text.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// The response body was not valid JSON of the expected shape.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
    /// A request URL could not be built from the configured base URL.
    #[error("invalid request URL")]
    Url(#[source] url::ParseError),
}
