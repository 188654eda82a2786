//! Trait definitions for the volumes API client.
//!
//! The trait enables dependency injection and mocking: the service is
//! generic over [`VolumesApi`], so production code uses the real
//! [`VolumesClient`] while tests substitute a scripted mock and never
//! touch the network.

use async_trait::async_trait;

use super::client::VolumesClient;
use super::domain::GatewayError;
use super::dto;

/// Trait for the primary metadata service.
#[async_trait]
pub trait VolumesApi: Send + Sync {
    /// Run a search query, optionally capping the result page size.
    async fn search(
        &self,
        query: &str,
        max_results: Option<u32>,
    ) -> Result<dto::VolumesResponse, GatewayError>;

    /// Look up a single volume by identifier.
    async fn volume(&self, id: &str) -> Result<dto::Volume, GatewayError>;
}

#[async_trait]
impl VolumesApi for VolumesClient {
    async fn search(
        &self,
        query: &str,
        max_results: Option<u32>,
    ) -> Result<dto::VolumesResponse, GatewayError> {
        self.search(query, max_results).await
    }

    async fn volume(&self, id: &str) -> Result<dto::Volume, GatewayError> {
        self.volume(id).await
    }
}
