//! Internal domain models for supplemental enrichment.
//!
//! These types are OUR types - they don't change when the secondary API
//! changes. All external responses get converted into these via the
//! adapter.

use serde::{Deserialize, Serialize};

use crate::model::BookRecord;

/// Extended fields fetched from the secondary source for one edition.
///
/// Everything here is supplemental: absence of any field (or of the whole
/// record) never affects the primary record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplementalRecord {
    /// Secondary-source edition key (e.g. "/books/OL7353617M")
    pub edition_key: Option<String>,
    /// Publishers as listed by the secondary source
    pub publishers: Vec<String>,
    /// Page count, when the edition reports one
    pub number_of_pages: Option<u32>,
    /// Language codes (e.g. "eng")
    pub languages: Vec<String>,
    /// Opening line of the work, when recorded
    pub first_sentence: Option<String>,
    /// Subject headings
    pub subjects: Vec<String>,
    /// Edition publish date (free-form)
    pub publish_date: Option<String>,
}

/// Author details resolved from the secondary source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDetails {
    pub name: String,
    /// Biography ("No biography available" when the source has none)
    pub bio: String,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
}

/// A canonical record plus whatever supplemental data resolved.
///
/// Supplemental fields are attached, never merged into the primary record,
/// so primary-source values cannot be overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBookRecord {
    /// The primary record, unchanged
    pub record: BookRecord,
    /// Secondary-source fields; present only when an ISBN resolved and the
    /// lookup succeeded
    pub supplemental: Option<SupplementalRecord>,
    /// Higher-resolution cover URL; present whenever an ISBN resolved
    pub enhanced_cover: Option<String>,
}

impl EnrichedBookRecord {
    /// A record with no supplemental data attached.
    pub fn bare(record: BookRecord) -> Self {
        Self {
            record,
            supplemental: None,
            enhanced_cover: None,
        }
    }

    /// Whether any secondary-source data resolved.
    pub fn has_supplemental(&self) -> bool {
        self.supplemental.is_some()
    }
}

/// Cover image sizes offered by the secondary source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverSize {
    /// Small thumbnail
    Small,
    /// Medium (default)
    #[default]
    Medium,
    /// Large
    Large,
}

impl CoverSize {
    /// Single-letter suffix used in cover URLs.
    pub fn suffix(self) -> &'static str {
        match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        }
    }
}

/// Errors that can occur talking to the secondary source.
///
/// These never escape the enrichment service: `enrich` degrades to a bare
/// record and `resolve_author` to `None`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("not found in secondary source")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_size_suffixes() {
        assert_eq!(CoverSize::Small.suffix(), "S");
        assert_eq!(CoverSize::Medium.suffix(), "M");
        assert_eq!(CoverSize::Large.suffix(), "L");
        assert_eq!(CoverSize::default(), CoverSize::Medium);
    }

    #[test]
    fn test_bare_record_has_no_supplemental() {
        let record = BookRecord {
            id: "v".to_string(),
            title: "T".to_string(),
            authors: vec!["A".to_string()],
            description: String::new(),
            cover_image: String::new(),
            average_rating: 0.0,
            published_date: "Unknown".to_string(),
            genres: vec!["Fiction".to_string()],
            page_count: 0,
            language: "en".to_string(),
            publisher: "Unknown".to_string(),
            isbn: None,
            identifiers: vec![],
        };

        let enriched = EnrichedBookRecord::bare(record.clone());

        assert!(!enriched.has_supplemental());
        assert!(enriched.enhanced_cover.is_none());
        assert_eq!(enriched.record, record);
    }
}
