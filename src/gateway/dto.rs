//! Volumes API Data Transfer Objects
//!
//! These types match EXACTLY what the volumes API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the gateway module - convert to
//! [`crate::model::BookRecord`] via the adapter.
//!
//! API shape: `GET {base}?q=<query>[&maxResults=N]` returns a list response;
//! `GET {base}/{id}` returns a single volume. A search with no matches omits
//! the `items` key entirely rather than sending an empty array.

use serde::{Deserialize, Serialize};

/// Search response from the volumes endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    /// Total matches reported by the service (may exceed `items.len()`)
    pub total_items: Option<u64>,
    /// Result page; absent upstream when there are no matches
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// A single volume (search item or direct lookup response).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Opaque volume identifier
    pub id: String,
    /// Descriptive metadata; occasionally missing on malformed items
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

/// Descriptive metadata for a volume. Every field is optional upstream.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinks>,
    pub average_rating: Option<f32>,
    pub published_date: Option<String>,
    /// Slash-delimited category paths (e.g. "Fiction / Science Fiction")
    #[serde(default)]
    pub categories: Vec<String>,
    pub page_count: Option<u32>,
    pub language: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub industry_identifiers: Vec<IndustryIdentifier>,
}

/// Image size variants. Not every variant is present for every volume.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
}

/// An industry identifier entry (ISBN_10, ISBN_13, ISSN, OTHER).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub code: Option<i64>,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
