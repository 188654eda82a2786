//! Fallback search strategies for random book picks.
//!
//! A strategy is one candidate query tried in a fixed priority order until
//! results are found. The chain is data, not control flow: the service
//! evaluates the descriptors with a single first-success loop instead of
//! duplicated branching per query.

/// One candidate search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStrategy {
    /// Query string sent to the volumes service
    pub query: String,
    /// Result page size to request
    pub max_results: u32,
    /// Whether qualifying items must carry a usable cover image
    pub require_cover: bool,
}

impl SearchStrategy {
    fn new(query: impl Into<String>, max_results: u32, require_cover: bool) -> Self {
        Self {
            query: query.into(),
            max_results,
            require_cover,
        }
    }
}

/// Generic popular-query terms tried after the genre-specific strategy.
const GENERIC_TERMS: &[&str] = &["bestseller", "popular books", "fiction", "nonfiction"];

/// Build the ordered strategy chain for a random pick.
///
/// A genre-specific subject filter comes first when a genre is given
/// ("all" means no filter), followed by the fixed generic terms. All
/// chain entries require a cover.
pub fn strategy_chain(genre: Option<&str>) -> Vec<SearchStrategy> {
    let mut chain = Vec::with_capacity(GENERIC_TERMS.len() + 1);

    if let Some(genre) = genre
        && genre != "all"
        && !genre.is_empty()
    {
        chain.push(SearchStrategy::new(
            format!("subject:{}", genre.to_lowercase()),
            40,
            true,
        ));
    }

    for term in GENERIC_TERMS {
        chain.push(SearchStrategy::new(*term, 40, true));
    }

    chain
}

/// The last-resort query run after the whole chain comes up empty.
///
/// Accepts any item, cover or not; errors from this one propagate instead
/// of being skipped.
pub fn last_resort() -> SearchStrategy {
    SearchStrategy::new("books", 20, false)
}
