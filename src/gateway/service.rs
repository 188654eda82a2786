//! Gateway service - high-level search, lookup, and random-pick operations.
//!
//! This is the API the presentation layer calls:
//! 1. `search` - one query against the catalog, normalized records out
//! 2. `details` - single-volume lookup by identifier
//! 3. `random` - fallback strategy chain, uniform pick among qualifying items
//! 4. `recommendations` - best-effort follow-up searches seeded by a record
//!
//! The service is generic over [`VolumesApi`] so tests can script the
//! upstream instead of hitting the network.

use rand::seq::IndexedRandom;

use super::adapter;
use super::client::VolumesClient;
use super::domain::GatewayError;
use super::dto;
use super::strategy::{self, SearchStrategy};
use super::traits::VolumesApi;
use crate::model::BookRecord;

/// Follow-up search results seeded from one record.
#[derive(Debug, Clone, Default)]
pub struct Recommendations {
    /// Books sharing the seed record's first genre
    pub by_genre: Vec<BookRecord>,
    /// Books by the seed record's first author
    pub by_author: Vec<BookRecord>,
}

/// High-level gateway over the primary metadata service.
pub struct BookGateway<A: VolumesApi = VolumesClient> {
    api: A,
}

impl<A: VolumesApi> BookGateway<A> {
    /// Create a gateway over the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Search the catalog, optionally restricted to a genre.
    ///
    /// A genre of "all" (or empty) means no restriction. Returns an empty
    /// vec when the upstream reports no matches.
    pub async fn search(
        &self,
        query: &str,
        genre: Option<&str>,
    ) -> Result<Vec<BookRecord>, GatewayError> {
        let search_query = match genre {
            Some(g) if g != "all" && !g.is_empty() => {
                format!("{query} subject:{}", g.to_lowercase())
            }
            _ => query.to_string(),
        };

        let response = self.api.search(&search_query, None).await?;
        Ok(response.items.into_iter().map(adapter::to_record).collect())
    }

    /// Look up a single volume by identifier.
    pub async fn details(&self, id: &str) -> Result<BookRecord, GatewayError> {
        let volume = self.api.volume(id).await?;
        Ok(adapter::to_record(volume))
    }

    /// Pick a random book.
    ///
    /// Walks the strategy chain in order and returns a uniformly random
    /// qualifying item from the first strategy that yields any. Failed
    /// strategies are logged and skipped. When the whole chain comes up
    /// empty, one last-resort query accepts any item, cover or not; only
    /// if that is also empty does the call fail with
    /// [`GatewayError::NoResults`].
    pub async fn random(&self, genre: Option<&str>) -> Result<BookRecord, GatewayError> {
        for strategy in strategy::strategy_chain(genre) {
            match self.try_strategy(&strategy).await {
                Ok(Some(volume)) => return Ok(adapter::to_record(volume)),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("random pick strategy '{}' failed: {}", strategy.query, e);
                }
            }
        }

        // Last resort: any item qualifies, and errors are no longer skipped.
        let volume = self
            .try_strategy(&strategy::last_resort())
            .await?
            .ok_or(GatewayError::NoResults)?;
        Ok(adapter::to_record(volume))
    }

    /// Best-effort follow-up searches seeded by a record's first genre and
    /// first author. A failed follow-up yields an empty list, never an
    /// error; the seed lookup itself can still fail.
    pub async fn recommendations(&self, id: &str) -> Result<Recommendations, GatewayError> {
        let seed = self.details(id).await?;

        // Normalization guarantees both lists are non-empty.
        let genre = &seed.genres[0];
        let author = &seed.authors[0];

        let by_genre = self
            .follow_up_search(&format!("subject:{genre}"))
            .await;
        let by_author = self
            .follow_up_search(&format!("inauthor:{author}"))
            .await;

        Ok(Recommendations {
            by_genre,
            by_author,
        })
    }

    /// Run one strategy and pick a uniformly random qualifying item.
    async fn try_strategy(
        &self,
        strategy: &SearchStrategy,
    ) -> Result<Option<dto::Volume>, GatewayError> {
        let response = self
            .api
            .search(&strategy.query, Some(strategy.max_results))
            .await?;

        let mut qualifying = response.items;
        if strategy.require_cover {
            qualifying.retain(adapter::has_usable_cover);
        }

        let mut rng = rand::rng();
        Ok(qualifying.choose(&mut rng).cloned())
    }

    async fn follow_up_search(&self, query: &str) -> Vec<BookRecord> {
        match self.api.search(query, Some(5)).await {
            Ok(response) => response.items.into_iter().map(adapter::to_record).collect(),
            Err(e) => {
                tracing::debug!("recommendation search '{}' failed: {}", query, e);
                Vec::new()
            }
        }
    }
}
