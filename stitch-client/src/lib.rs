//! Stitch HTTP Client
//!
//! A type-safe HTTP client for the GP record stitch service, plus a poller
//! that drives a stitch job from creation to a downloadable artifact.
//!
//! The service assembles a patient's stored documents into one artifact
//! asynchronously: the client submits a job, then polls the same endpoint
//! until the job completes or a bounded number of "no progress yet"
//! observations is exhausted.
//!
//! # Example
//!
//! ```no_run
//! use reqwest::header::HeaderMap;
//! use stitch_client::{PollerConfig, StitchClient, StitchJobPoller};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = StitchClient::new("https://records.example.nhs.uk", HeaderMap::new());
//!     let poller = StitchJobPoller::new(client, PollerConfig::default());
//!
//!     let record = poller.retrieve("9000000009").await?;
//!     println!("Download at: {}", record.presigned_url);
//!     Ok(())
//! }
//! ```

pub mod error;
mod poller;
mod stitch;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poller::{PollerConfig, StitchApi, StitchJobPoller};
pub use stitch_core::domain::stitch::{StitchJob, StitchStatus};

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

/// HTTP client for the stitch service API
///
/// Holds the service base address and the opaque authentication headers the
/// session layer hands out; the headers are attached verbatim to every
/// request. The client itself is stateless across calls and cheap to clone,
/// so concurrent retrievals for different patients can share one instance.
#[derive(Debug, Clone)]
pub struct StitchClient {
    /// Base URL of the stitch service (e.g., "https://records.example.nhs.uk")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Authentication headers attached to every request, opaque to this crate
    auth_headers: HeaderMap,
}

impl StitchClient {
    /// Create a new stitch service client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the stitch service
    /// * `auth_headers` - Session/auth headers to attach to every request
    ///
    /// # Example
    /// ```
    /// use reqwest::header::HeaderMap;
    /// use stitch_client::StitchClient;
    ///
    /// let client = StitchClient::new("https://records.example.nhs.uk", HeaderMap::new());
    /// ```
    pub fn new(base_url: impl Into<String>, auth_headers: HeaderMap) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            auth_headers,
        }
    }

    /// Create a new stitch service client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use reqwest::Client;
    /// use reqwest::header::HeaderMap;
    /// use std::time::Duration;
    /// use stitch_client::StitchClient;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = StitchClient::with_client(
    ///     "https://records.example.nhs.uk",
    ///     HeaderMap::new(),
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        auth_headers: HeaderMap,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            auth_headers,
        }
    }

    /// Get the base URL of the stitch service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an `ApiError` if the request
    /// failed, or deserializes the response body if successful. Non-2xx
    /// responses are transport failures as far as the poller is concerned
    /// and are never retried.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = StitchClient::new("https://records.example.nhs.uk", HeaderMap::new());
        assert_eq!(client.base_url(), "https://records.example.nhs.uk");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = StitchClient::new("https://records.example.nhs.uk/", HeaderMap::new());
        assert_eq!(client.base_url(), "https://records.example.nhs.uk");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = StitchClient::with_client(
            "https://records.example.nhs.uk",
            HeaderMap::new(),
            http_client,
        );
        assert_eq!(client.base_url(), "https://records.example.nhs.uk");
    }
}
