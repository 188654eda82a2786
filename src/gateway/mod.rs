//! Metadata gateway - searches and looks up books on the primary catalog.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain types** (`domain.rs`) - Errors and normalization constants
//! - **API DTOs** (`dto.rs`) - Exact volumes API response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to canonical [`BookRecord`]s
//! - **Client** (`client.rs`) - HTTP client for the volumes API
//! - **Strategies** (`strategy.rs`) - Ordered fallback queries for random picks
//! - **Service** (`service.rs`) - High-level search/random/details operations
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. The service logic is testable against mock clients
//!
//! # Usage
//!
//! ```ignore
//! use book_scout::gateway::{BookGateway, VolumesClient};
//!
//! let gateway = BookGateway::new(VolumesClient::new());
//! let results = gateway.search("dune", Some("science fiction")).await?;
//! let pick = gateway.random(None).await?;
//! ```

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod service;
pub mod strategy;
pub mod traits;

pub use client::VolumesClient;
pub use domain::{GatewayError, PLACEHOLDER_COVER};
pub use service::{BookGateway, Recommendations};
pub use strategy::SearchStrategy;
