//! Open Library HTTP client
//!
//! Handles communication with the secondary metadata service.
//! See: https://openlibrary.org/developers/api
//!
//! No API key is required. Author keys returned by the search endpoint are
//! absolute paths ("/authors/OL79034A") and are appended to the base URL
//! as-is. Cover images live on a separate host with a predictable URL
//! template, so no request is needed to build a cover link.

use super::domain::{CoverSize, EnrichmentError};
use super::dto;

/// Default base URL of the secondary metadata service.
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

/// Default base URL of the cover image host.
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org/b";

/// Open Library API client
pub struct OpenLibraryClient {
    http_client: reqwest::Client,
    base_url: String,
    covers_url: String,
}

impl OpenLibraryClient {
    /// Create a new client against the default endpoints.
    pub fn new() -> Self {
        Self::with_base_urls(DEFAULT_BASE_URL, DEFAULT_COVERS_URL)
    }

    /// Create a client with custom endpoints (configuration and tests).
    pub fn with_base_urls(base_url: impl Into<String>, covers_url: impl Into<String>) -> Self {
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
            covers_url: covers_url.into(),
        }
    }

    /// Look up an edition by ISBN.
    pub async fn edition_by_isbn(
        &self,
        isbn: &str,
    ) -> Result<dto::EditionResponse, EnrichmentError> {
        let url = format!("{}/isbn/{}.json", self.base_url, isbn);
        self.get_json(&url).await
    }

    /// Fetch an author detail record by its key path.
    pub async fn author_by_key(&self, key: &str) -> Result<dto::AuthorResponse, EnrichmentError> {
        let url = format!("{}{}.json", self.base_url, key);
        self.get_json(&url).await
    }

    /// Search authors by name.
    pub async fn search_authors(
        &self,
        name: &str,
    ) -> Result<dto::AuthorSearchResponse, EnrichmentError> {
        let url = format!(
            "{}/search/authors.json?q={}",
            self.base_url,
            urlencoding::encode(name)
        );
        self.get_json(&url).await
    }

    /// Build a cover image URL for an ISBN. Pure string formatting; the
    /// cover host serves a 1x1 placeholder for unknown ISBNs.
    pub fn cover_url(&self, isbn: &str, size: CoverSize) -> String {
        format!("{}/isbn/{}-{}.jpg", self.covers_url, isbn, size.suffix())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, EnrichmentError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(EnrichmentError::NotFound);
        }

        if !status.is_success() {
            return Err(EnrichmentError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}

impl Default for OpenLibraryClient {
    fn default() -> Self {
        Self::new()
    }
}
