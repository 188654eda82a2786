//! Supplemental enrichment - augments canonical records from a secondary
//! metadata source.
//!
//! # Architecture
//!
//! Mirrors the gateway module's separation:
//! - **Domain models** (`domain.rs`) - Supplemental record, author details
//! - **API DTOs** (`dto.rs`) - Exact secondary-service response shapes
//! - **Adapter** (`adapter.rs`) - Convert DTOs to domain models
//! - **Client** (`client.rs`) - HTTP client for the secondary service
//! - **Service** (`service.rs`) - ISBN resolution, merge policy
//!
//! Enrichment is best-effort by contract: every failure degrades to "no
//! supplemental data" so it can never block primary display, and merged
//! data is additive only - primary fields are never overwritten.

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod service;
pub mod traits;

pub use client::OpenLibraryClient;
pub use domain::{AuthorDetails, CoverSize, EnrichedBookRecord, EnrichmentError, SupplementalRecord};
pub use service::EnrichmentService;
