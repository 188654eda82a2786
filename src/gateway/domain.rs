//! Domain types for the metadata gateway.
//!
//! The error taxonomy here is what callers match on: the gateway surfaces
//! [`GatewayError::Network`] and [`GatewayError::NoResults`] to the
//! presentation layer, while enrichment failures never reach it (see the
//! `enrichment` module).

/// Placeholder cover used when no usable image variant exists.
pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/128x192?text=Book+Cover";

/// Names synthesized when a source record has no authors.
///
/// Drawn uniformly at random; the pool is fixed so placeholder records are
/// recognizable in tests and in the UI.
pub(crate) const FALLBACK_AUTHORS: &[&str] = &[
    "Isabella Martínez",
    "James Chen",
    "Sophia Patel",
    "Marcus Johnson",
    "Aisha Rahman",
    "Carlos Rodriguez",
    "Emma Thompson",
    "Lucas Kim",
    "Olivia Santos",
    "Noah Williams",
    "Maya Patel",
    "Ethan Chang",
    "Ava O'Connor",
    "Liam Garcia",
    "Zoe Anderson",
    "Benjamin Lee",
    "Charlotte Wong",
    "Daniel Silva",
    "Victoria Chen",
    "Alexander Morgan",
];

/// Genre labels used both as synthesized fallbacks and for the genre filter.
pub const GENRES: &[&str] = &[
    "Fiction",
    "Mystery",
    "Science Fiction",
    "Fantasy",
    "Romance",
    "Thriller",
    "Biography",
    "History",
    "Philosophy",
    "Poetry",
    "Science",
    "Technology",
    "Business",
    "Self-Help",
    "Cooking",
    "Travel",
    "Art",
    "Music",
    "Sports",
    "Education",
];

/// Errors that can occur on gateway operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("volume not found: {0}")]
    NotFound(String),

    #[error("no books found with any search strategy")]
    NoResults,

    #[error("API error: {0}")]
    Api(String),
}
