//! Enrichment service - resolves ISBNs and attaches secondary-source data.
//!
//! The flow for one record:
//! 1. Resolve an ISBN-13 (preferred) or ISBN-10 from the record's
//!    identifiers; without one, enrichment is a no-op
//! 2. Look up the edition on the secondary service
//! 3. Attach the supplemental record and a large cover URL
//!
//! Every failure along the way degrades to "no supplemental data" - by
//! contract, enrichment never fails the caller and never touches primary
//! fields.

use super::adapter;
use super::client::OpenLibraryClient;
use super::domain::{AuthorDetails, CoverSize, EnrichedBookRecord};
use super::traits::OpenLibraryApi;
use crate::model::BookRecord;

/// Best-effort enrichment over the secondary metadata service.
pub struct EnrichmentService<A: OpenLibraryApi = OpenLibraryClient> {
    api: A,
}

impl<A: OpenLibraryApi> EnrichmentService<A> {
    /// Create a service over the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Attach secondary-source data to a record.
    ///
    /// Without a resolvable ISBN the record comes back unchanged with no
    /// supplemental data. With one, a failed or empty lookup still yields
    /// the unchanged record (plus the enhanced cover URL, which needs no
    /// request).
    pub async fn enrich(&self, record: BookRecord) -> EnrichedBookRecord {
        let Some(isbn) = record.preferred_isbn().map(str::to_string) else {
            return EnrichedBookRecord::bare(record);
        };

        let supplemental = match self.api.edition_by_isbn(&isbn).await {
            Ok(edition) => Some(adapter::to_supplemental(edition)),
            Err(e) => {
                // Best-effort: log and degrade, never block primary display
                tracing::warn!("secondary lookup failed for ISBN {}: {}", isbn, e);
                None
            }
        };

        EnrichedBookRecord {
            enhanced_cover: Some(self.api.cover_url(&isbn, CoverSize::Large)),
            record,
            supplemental,
        }
    }

    /// Resolve an author by name: search, take the first hit, fetch its
    /// detail record. Returns `None` (not an error) on no match or any
    /// failure.
    pub async fn resolve_author(&self, name: &str) -> Option<AuthorDetails> {
        let search = match self.api.search_authors(name).await {
            Ok(search) => search,
            Err(e) => {
                tracing::debug!("author search failed for '{}': {}", name, e);
                return None;
            }
        };

        let doc = search.docs.first()?;

        match self.api.author_by_key(&doc.key).await {
            Ok(author) => Some(adapter::to_author_details(author)),
            Err(e) => {
                tracing::debug!("author lookup failed for '{}': {}", doc.key, e);
                None
            }
        }
    }

    /// Build a cover URL for an ISBN at the given size.
    pub fn cover_url(&self, isbn: &str, size: CoverSize) -> String {
        self.api.cover_url(isbn, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::domain::EnrichmentError;
    use crate::enrichment::dto;
    use crate::enrichment::traits::mocks::{MockOpenLibrary, edition};
    use crate::model::Identifier;

    fn record(identifiers: Vec<Identifier>) -> BookRecord {
        BookRecord {
            id: "vol-1".to_string(),
            title: "Dune".to_string(),
            authors: vec!["Frank Herbert".to_string()],
            description: "Spice.".to_string(),
            cover_image: "http://covers.example.com/dune.jpg".to_string(),
            average_rating: 4.5,
            published_date: "1965".to_string(),
            genres: vec!["Fiction".to_string()],
            page_count: 412,
            language: "en".to_string(),
            publisher: "Ace Books".to_string(),
            isbn: identifiers.first().map(|id| id.value.clone()),
            identifiers,
        }
    }

    #[tokio::test]
    async fn test_enrich_without_isbn_is_a_no_op() {
        let service = EnrichmentService::new(MockOpenLibrary::new());
        let input = record(vec![Identifier::new("OTHER", "OCLC:123")]);

        let enriched = service.enrich(input.clone()).await;

        assert_eq!(enriched.record, input);
        assert!(enriched.supplemental.is_none());
        assert!(enriched.enhanced_cover.is_none());
        assert!(service.api.recorded_lookups().is_empty());
    }

    #[tokio::test]
    async fn test_enrich_prefers_isbn13() {
        let mock = MockOpenLibrary::new().with_edition("9780441172719", Ok(edition(528)));
        let service = EnrichmentService::new(mock);
        let input = record(vec![
            Identifier::new("ISBN_10", "0441172717"),
            Identifier::new("ISBN_13", "9780441172719"),
        ]);

        let enriched = service.enrich(input).await;

        assert_eq!(
            service.api.recorded_lookups(),
            vec!["9780441172719".to_string()]
        );
        let supplemental = enriched.supplemental.unwrap();
        assert_eq!(supplemental.number_of_pages, Some(528));
        assert_eq!(supplemental.languages, vec!["eng".to_string()]);
        assert_eq!(
            enriched.enhanced_cover.as_deref(),
            Some("mock://covers/9780441172719-L.jpg")
        );
    }

    #[tokio::test]
    async fn test_enrich_never_mutates_primary_fields() {
        let mock = MockOpenLibrary::new().with_edition("0441172717", Ok(edition(999)));
        let service = EnrichmentService::new(mock);
        let input = record(vec![Identifier::new("ISBN_10", "0441172717")]);

        let enriched = service.enrich(input.clone()).await;

        // Supplemental page count differs from the primary one; the
        // primary record must be byte-for-byte what went in.
        assert_eq!(enriched.record, input);
        assert_eq!(enriched.record.page_count, 412);
        assert_eq!(enriched.supplemental.unwrap().number_of_pages, Some(999));
    }

    #[tokio::test]
    async fn test_enrich_swallows_lookup_failures() {
        let mock = MockOpenLibrary::new()
            .with_edition("0441172717", Err(EnrichmentError::Network("timeout".into())));
        let service = EnrichmentService::new(mock);
        let input = record(vec![Identifier::new("ISBN_10", "0441172717")]);

        let enriched = service.enrich(input.clone()).await;

        assert_eq!(enriched.record, input);
        assert!(enriched.supplemental.is_none());
        // The cover URL is derived from the ISBN alone and survives
        assert!(enriched.enhanced_cover.is_some());
    }

    #[tokio::test]
    async fn test_resolve_author_takes_first_match() {
        let mock = MockOpenLibrary::new()
            .with_author_search(
                "Frank Herbert",
                Ok(dto::AuthorSearchResponse {
                    num_found: Some(2),
                    docs: vec![
                        dto::AuthorDoc {
                            key: "/authors/OL79034A".to_string(),
                            name: Some("Frank Herbert".to_string()),
                        },
                        dto::AuthorDoc {
                            key: "/authors/OL2622837A".to_string(),
                            name: Some("Frank Herbert Jr.".to_string()),
                        },
                    ],
                }),
            )
            .with_author(
                "/authors/OL79034A",
                dto::AuthorResponse {
                    name: Some("Frank Herbert".to_string()),
                    bio: Some(dto::TextField::Plain(
                        "American science fiction writer.".to_string(),
                    )),
                    birth_date: Some("8 October 1920".to_string()),
                    death_date: Some("11 February 1986".to_string()),
                },
            );
        let service = EnrichmentService::new(mock);

        let details = service.resolve_author("Frank Herbert").await.unwrap();

        assert_eq!(details.name, "Frank Herbert");
        assert_eq!(details.bio, "American science fiction writer.");
    }

    #[tokio::test]
    async fn test_resolve_author_absent_on_no_match() {
        let service = EnrichmentService::new(MockOpenLibrary::new());

        assert!(service.resolve_author("Nobody At All").await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_author_absent_on_failure() {
        let mock = MockOpenLibrary::new().with_author_search(
            "Frank Herbert",
            Err(EnrichmentError::Network("connection refused".into())),
        );
        let service = EnrichmentService::new(mock);

        assert!(service.resolve_author("Frank Herbert").await.is_none());
    }
}
