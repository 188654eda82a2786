//! Trait definitions for the secondary metadata client.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses [`OpenLibraryClient`], while tests substitute
//! scripted mock implementations.

use async_trait::async_trait;

use super::client::OpenLibraryClient;
use super::domain::{CoverSize, EnrichmentError};
use super::dto;

/// Trait for the secondary metadata service.
#[async_trait]
pub trait OpenLibraryApi: Send + Sync {
    /// Look up an edition by ISBN.
    async fn edition_by_isbn(&self, isbn: &str) -> Result<dto::EditionResponse, EnrichmentError>;

    /// Fetch an author detail record by its key path.
    async fn author_by_key(&self, key: &str) -> Result<dto::AuthorResponse, EnrichmentError>;

    /// Search authors by name.
    async fn search_authors(
        &self,
        name: &str,
    ) -> Result<dto::AuthorSearchResponse, EnrichmentError>;

    /// Build a cover image URL for an ISBN.
    fn cover_url(&self, isbn: &str, size: CoverSize) -> String;
}

#[async_trait]
impl OpenLibraryApi for OpenLibraryClient {
    async fn edition_by_isbn(
        &self,
        isbn: &str,
    ) -> Result<dto::EditionResponse, EnrichmentError> {
        self.edition_by_isbn(isbn).await
    }

    async fn author_by_key(&self, key: &str) -> Result<dto::AuthorResponse, EnrichmentError> {
        self.author_by_key(key).await
    }

    async fn search_authors(
        &self,
        name: &str,
    ) -> Result<dto::AuthorSearchResponse, EnrichmentError> {
        self.search_authors(name).await
    }

    fn cover_url(&self, isbn: &str, size: CoverSize) -> String {
        self.cover_url(isbn, size)
    }
}

/// Scripted mock client for service tests.
#[cfg(test)]
pub mod mocks {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Mock secondary API keyed by ISBN / author key / query.
    ///
    /// Unconfigured lookups return [`EnrichmentError::NotFound`];
    /// unconfigured author searches return zero docs.
    #[derive(Default)]
    pub struct MockOpenLibrary {
        editions: HashMap<String, Result<dto::EditionResponse, EnrichmentError>>,
        authors: HashMap<String, dto::AuthorResponse>,
        author_searches: HashMap<String, Result<dto::AuthorSearchResponse, EnrichmentError>>,
        /// ISBNs looked up, in call order
        pub lookups: Mutex<Vec<String>>,
    }

    impl MockOpenLibrary {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_edition(
            mut self,
            isbn: &str,
            result: Result<dto::EditionResponse, EnrichmentError>,
        ) -> Self {
            self.editions.insert(isbn.to_string(), result);
            self
        }

        pub fn with_author(mut self, key: &str, author: dto::AuthorResponse) -> Self {
            self.authors.insert(key.to_string(), author);
            self
        }

        pub fn with_author_search(
            mut self,
            query: &str,
            result: Result<dto::AuthorSearchResponse, EnrichmentError>,
        ) -> Self {
            self.author_searches.insert(query.to_string(), result);
            self
        }

        pub fn recorded_lookups(&self) -> Vec<String> {
            self.lookups.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OpenLibraryApi for MockOpenLibrary {
        async fn edition_by_isbn(
            &self,
            isbn: &str,
        ) -> Result<dto::EditionResponse, EnrichmentError> {
            self.lookups.lock().unwrap().push(isbn.to_string());
            self.editions
                .get(isbn)
                .cloned()
                .unwrap_or(Err(EnrichmentError::NotFound))
        }

        async fn author_by_key(
            &self,
            key: &str,
        ) -> Result<dto::AuthorResponse, EnrichmentError> {
            self.authors
                .get(key)
                .cloned()
                .ok_or(EnrichmentError::NotFound)
        }

        async fn search_authors(
            &self,
            name: &str,
        ) -> Result<dto::AuthorSearchResponse, EnrichmentError> {
            self.author_searches
                .get(name)
                .cloned()
                .unwrap_or(Ok(dto::AuthorSearchResponse {
                    num_found: Some(0),
                    docs: vec![],
                }))
        }

        fn cover_url(&self, isbn: &str, size: CoverSize) -> String {
            format!("mock://covers/{}-{}.jpg", isbn, size.suffix())
        }
    }

    /// A minimal edition response for a given page count.
    pub fn edition(pages: u32) -> dto::EditionResponse {
        dto::EditionResponse {
            key: Some("/books/OL1M".to_string()),
            title: Some("Edition".to_string()),
            publish_date: Some("2005".to_string()),
            publishers: vec!["Ace Books".to_string()],
            number_of_pages: Some(pages),
            subjects: vec![],
            languages: vec![dto::LanguageRef {
                key: "/languages/eng".to_string(),
            }],
            first_sentence: None,
            description: None,
            isbn_13: vec![],
            isbn_10: vec![],
        }
    }
}
