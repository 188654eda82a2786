//! Secondary metadata service Data Transfer Objects
//!
//! These types match EXACTLY what the Open Library API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the enrichment module - convert to
//! domain types via the adapter.
//!
//! ## API Quirks
//!
//! Prose fields (`description`, `bio`, `first_sentence`) come in two
//! shapes: a plain JSON string, or a typed object
//! `{"type": "/type/text", "value": "..."}`. [`TextField`] absorbs both.
//! Languages are key references (`{"key": "/languages/eng"}`), not codes.

use serde::{Deserialize, Serialize};

/// A prose field that may be a bare string or a typed text object.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TextField {
    Plain(String),
    Typed { value: String },
}

impl TextField {
    /// The prose content, whichever shape it arrived in.
    pub fn value(&self) -> &str {
        match self {
            TextField::Plain(s) => s,
            TextField::Typed { value } => value,
        }
    }
}

/// Reference to a language record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LanguageRef {
    /// Key path such as "/languages/eng"
    pub key: String,
}

/// Edition lookup response (`GET /isbn/{isbn}.json`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditionResponse {
    /// Edition key path such as "/books/OL7353617M"
    pub key: Option<String>,
    pub title: Option<String>,
    pub publish_date: Option<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    pub number_of_pages: Option<u32>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub languages: Vec<LanguageRef>,
    pub first_sentence: Option<TextField>,
    pub description: Option<TextField>,
    #[serde(default)]
    pub isbn_13: Vec<String>,
    #[serde(default)]
    pub isbn_10: Vec<String>,
}

/// Author search response (`GET /search/authors.json?q=<name>`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorSearchResponse {
    #[serde(rename = "numFound")]
    pub num_found: Option<u64>,
    #[serde(default)]
    pub docs: Vec<AuthorDoc>,
}

/// One author search hit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorDoc {
    /// Author key path such as "/authors/OL23919A"
    pub key: String,
    pub name: Option<String>,
}

/// Author detail response (`GET {authorKey}.json`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorResponse {
    pub name: Option<String>,
    pub bio: Option<TextField>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
