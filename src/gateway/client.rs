//! Volumes API HTTP client
//!
//! Handles communication with the primary book-metadata service.
//!
//! ## API Quirks
//!
//! - A search with zero matches returns `200 OK` with the `items` key
//!   omitted; the DTO defaults that to an empty list.
//! - Queries can carry field filters (`subject:`, `inauthor:`) inside the
//!   `q` parameter; the whole query string is percent-encoded as one value.
//! - No API key is required for search or lookup.

use super::domain::GatewayError;
use super::dto;

/// Default base URL of the volumes service.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Volumes API client
pub struct VolumesClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl VolumesClient {
    /// Create a new client against the default service endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (configuration and tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Run a search query, optionally capping the result page size.
    pub async fn search(
        &self,
        query: &str,
        max_results: Option<u32>,
    ) -> Result<dto::VolumesResponse, GatewayError> {
        let mut url = format!("{}?q={}", self.base_url, urlencoding::encode(query));
        if let Some(max) = max_results {
            url.push_str(&format!("&maxResults={max}"));
        }

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            // Prefer the service's own error message when it sends one
            if let Ok(error) = response.json::<dto::ErrorResponse>().await {
                return Err(GatewayError::Api(error.error.message));
            }
            return Err(GatewayError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::VolumesResponse>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }

    /// Look up a single volume by identifier.
    pub async fn volume(&self, id: &str) -> Result<dto::Volume, GatewayError> {
        let url = format!("{}/{}", self.base_url, id);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            // Any non-success on a direct lookup means the record is absent
            return Err(GatewayError::NotFound(id.to_string()));
        }

        response
            .json::<dto::Volume>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

impl Default for VolumesClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = VolumesClient::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = VolumesClient::with_base_url("http://localhost:8080/volumes");
        assert_eq!(client.base_url, "http://localhost:8080/volumes");
    }
}
