//! Core data models for book discovery.
//!
//! [`BookRecord`] is the canonical record every gateway operation produces:
//! all optional source fields carry explicit defaults, and `authors` /
//! `genres` are never empty after normalization. Records serialize to JSON
//! so the local store can persist favorites verbatim.

use serde::{Deserialize, Serialize};

/// An industry identifier attached to a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Identifier scheme as reported by the source ("ISBN_13", "ISBN_10", "OTHER")
    pub kind: String,
    /// The identifier value
    pub value: String,
}

impl Identifier {
    /// Create an identifier from scheme and value.
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Canonical book record produced by the gateway adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Opaque source identifier (immutable once created)
    pub id: String,
    /// Title ("Untitled" when the source omits it)
    pub title: String,
    /// Authors, never empty (synthesized placeholder when the source has none)
    pub authors: Vec<String>,
    /// Description ("No description available." when absent)
    pub description: String,
    /// Cover image URL, chosen by variant priority, else the placeholder
    pub cover_image: String,
    /// Average rating in [0, 5], 0 when unrated
    pub average_rating: f32,
    /// Free-form published date ("Unknown" when absent)
    pub published_date: String,
    /// Normalized genre labels, never empty
    pub genres: Vec<String>,
    /// Page count, 0 when unknown
    pub page_count: u32,
    /// Language code ("en" when absent)
    pub language: String,
    /// Publisher ("Unknown" when absent)
    pub publisher: String,
    /// First reported industry identifier, if any
    pub isbn: Option<String>,
    /// All industry identifiers; feeds ISBN resolution for enrichment
    pub identifiers: Vec<Identifier>,
}

impl BookRecord {
    /// Resolve the ISBN to use for secondary-source lookups.
    ///
    /// Prefers ISBN-13 over ISBN-10; other identifier schemes do not
    /// qualify. Returns `None` when the record carries neither.
    pub fn preferred_isbn(&self) -> Option<&str> {
        self.identifiers
            .iter()
            .find(|id| id.kind == "ISBN_13")
            .or_else(|| self.identifiers.iter().find(|id| id.kind == "ISBN_10"))
            .map(|id| id.value.as_str())
    }
}
