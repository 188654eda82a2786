//! Local persistence store for favorites, reviews, theme, and search
//! history.
//!
//! Three independent collections plus a scalar preference, each in its own
//! JSON file under the app data directory:
//! - `favorites.json` - flat list of full [`BookRecord`]s
//! - `reviews.json` - map from book id to its ordered review list
//! - `theme.json` - the theme preference
//! - `history.json` - recent search queries, most recent first
//!
//! All operations are synchronous and single-writer: last write wins, and
//! no cross-process consistency is provided. Reads are permissive - a
//! missing or corrupt file yields the empty collection with a logged
//! warning, so the store never fails a read. Writes go through a temp
//! file and rename.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::BookRecord;

const FAVORITES_FILE: &str = "favorites.json";
const REVIEWS_FILE: &str = "reviews.json";
const THEME_FILE: &str = "theme.json";
const HISTORY_FILE: &str = "history.json";

/// Maximum number of retained search-history entries.
const HISTORY_LIMIT: usize = 10;

/// A local review left by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, 1..=5
    pub rating: u8,
    /// Review body
    pub text: String,
    /// Client-clock timestamp stamped at add time
    pub date: DateTime<Utc>,
}

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(StoreError::UnknownTheme(other.to_string())),
        }
    }
}

/// Errors from store writes. Reads never fail.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to create data directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize {0}: {1}")]
    Serialize(String, serde_json::Error),

    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),

    #[error("Unknown theme: {0} (expected \"light\" or \"dark\")")]
    UnknownTheme(String),
}

/// File-backed store for the user's local collections.
pub struct StorageManager {
    data_dir: PathBuf,
}

impl StorageManager {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| StoreError::CreateDir(data_dir.clone(), e))?;
        Ok(Self { data_dir })
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// All favorited records. No ordering guarantee.
    pub fn favorites(&self) -> Vec<BookRecord> {
        self.read_json(FAVORITES_FILE)
    }

    /// Add a record to the favorites. A no-op (not an error) when the id
    /// is already present.
    pub fn add_favorite(&self, book: &BookRecord) -> Result<(), StoreError> {
        let mut favorites = self.favorites();
        if !favorites.iter().any(|fav| fav.id == book.id) {
            favorites.push(book.clone());
            self.write_json(FAVORITES_FILE, &favorites)?;
        }
        Ok(())
    }

    /// Remove a record from the favorites by id.
    pub fn remove_favorite(&self, id: &str) -> Result<(), StoreError> {
        let mut favorites = self.favorites();
        favorites.retain(|book| book.id != id);
        self.write_json(FAVORITES_FILE, &favorites)
    }

    /// Whether a record id is currently favorited.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites().iter().any(|book| book.id == id)
    }

    // ------------------------------------------------------------------
    // Reviews
    // ------------------------------------------------------------------

    /// Reviews for a book, in insertion (chronological) order. Empty for
    /// unknown ids.
    pub fn reviews(&self, id: &str) -> Vec<Review> {
        let all: HashMap<String, Vec<Review>> = self.read_json(REVIEWS_FILE);
        all.get(id).cloned().unwrap_or_default()
    }

    /// Append a review, stamped with the client clock. The rating is
    /// clamped into 1..=5.
    pub fn add_review(
        &self,
        id: &str,
        rating: u8,
        text: impl Into<String>,
    ) -> Result<Review, StoreError> {
        let review = Review {
            rating: rating.clamp(1, 5),
            text: text.into(),
            date: Utc::now(),
        };

        let mut all: HashMap<String, Vec<Review>> = self.read_json(REVIEWS_FILE);
        all.entry(id.to_string()).or_default().push(review.clone());
        self.write_json(REVIEWS_FILE, &all)?;

        Ok(review)
    }

    /// Arithmetic mean of a book's review ratings; 0 with no reviews.
    pub fn average_rating(&self, id: &str) -> f32 {
        let reviews = self.reviews(id);
        if reviews.is_empty() {
            return 0.0;
        }
        let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
        sum as f32 / reviews.len() as f32
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    /// The persisted theme, or Light when none is stored.
    pub fn theme(&self) -> Theme {
        self.read_json(THEME_FILE)
    }

    /// Persist the theme unconditionally.
    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.write_json(THEME_FILE, &theme)
    }

    // ------------------------------------------------------------------
    // Search history
    // ------------------------------------------------------------------

    /// Recent search queries, most recent first.
    pub fn search_history(&self) -> Vec<String> {
        self.read_json(HISTORY_FILE)
    }

    /// Record a search query. Known queries keep their position; new ones
    /// go to the front, and the list is capped at [`HISTORY_LIMIT`].
    pub fn add_search_history(&self, query: &str) -> Result<(), StoreError> {
        let mut history = self.search_history();
        if !history.iter().any(|entry| entry == query) {
            history.insert(0, query.to_string());
            history.truncate(HISTORY_LIMIT);
            self.write_json(HISTORY_FILE, &history)?;
        }
        Ok(())
    }

    /// Forget all recorded searches.
    pub fn clear_search_history(&self) -> Result<(), StoreError> {
        self.remove_file(HISTORY_FILE)
    }

    /// Remove every persisted collection.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        self.remove_file(FAVORITES_FILE)?;
        self.remove_file(REVIEWS_FILE)?;
        self.remove_file(THEME_FILE)?;
        self.remove_file(HISTORY_FILE)
    }

    // ------------------------------------------------------------------
    // File plumbing
    // ------------------------------------------------------------------

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Read a collection, falling back to its default on any problem.
    fn read_json<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.path(file);
        if !path.exists() {
            return T::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Corrupt store file {:?}, using empty: {}", path, e);
                    T::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read store file {:?}: {}", path, e);
                T::default()
            }
        }
    }

    /// Write a collection atomically (write to temp, then rename).
    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path(file);
        let contents = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::Serialize(file.to_string(), e))?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &contents)
            .map_err(|e| StoreError::Write(temp_path.clone(), e))?;
        std::fs::rename(&temp_path, &path)
            .map_err(|e| StoreError::Rename(temp_path, path.clone(), e))?;

        Ok(())
    }

    fn remove_file(&self, file: &str) -> Result<(), StoreError> {
        let path = self.path(file);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write(path, e)),
        }
    }
}

/// Default data directory under the OS data dir.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("book-scout")
}
