//! CLI command definitions and dispatch.
//!
//! Each subcommand group is implemented in its own submodule:
//! - `discover`: network-backed operations (search, random, details,
//!   author, recommend)
//! - `library`: local collections (favorites, reviews, theme, history)
//!
//! Clients and the store are constructed once here and passed down into
//! the command functions; nothing in the crate reaches for global state.

mod discover;
mod library;

pub use discover::{cmd_author, cmd_details, cmd_random, cmd_recommend, cmd_search};
pub use library::{cmd_config, cmd_favorites, cmd_history, cmd_reset, cmd_review, cmd_theme};

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config;
use crate::enrichment::{EnrichmentService, OpenLibraryClient};
use crate::error::Result;
use crate::gateway::{BookGateway, VolumesClient};
use crate::store::{StorageManager, Theme};

/// Book Scout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the local data directory (or set BOOK_SCOUT_DATA_DIR)
    #[arg(long, env = "BOOK_SCOUT_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Result ordering for search output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Upstream relevance order
    Relevance,
    /// Most recently published first
    Newest,
    /// Highest average rating first
    Rating,
}

/// Theme argument (maps onto the persisted preference).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog
    Search {
        /// Search terms
        query: String,
        /// Restrict to a genre ("all" means no restriction)
        #[arg(short, long)]
        genre: Option<String>,
        /// Result ordering
        #[arg(long, value_enum, default_value = "relevance")]
        sort: SortOrder,
    },
    /// Pick a random book
    Random {
        /// Prefer a genre when picking
        #[arg(short, long)]
        genre: Option<String>,
    },
    /// Show details for one book
    Details {
        /// Volume identifier
        id: String,
        /// Also fetch secondary-source data
        #[arg(long)]
        enrich: bool,
    },
    /// Look up an author in the secondary source
    Author {
        /// Author name
        name: String,
    },
    /// Recommend books similar to one book
    Recommend {
        /// Volume identifier to seed from
        id: String,
    },
    /// Manage favorite books
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Manage local reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Show or set the theme preference
    Theme {
        /// New theme; omit to show the current one
        theme: Option<ThemeArg>,
    },
    /// Show or clear recent searches
    History {
        /// Forget all recorded searches
        #[arg(long)]
        clear: bool,
    },
    /// Wipe all local data (favorites, reviews, theme, history)
    Reset,
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Favorites subcommands
#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List favorited books
    List,
    /// Fetch a book by id and add it to the favorites
    Add { id: String },
    /// Remove a book from the favorites
    Remove { id: String },
}

/// Review subcommands
#[derive(Subcommand)]
pub enum ReviewAction {
    /// Add a review for a book
    Add {
        /// Volume identifier
        id: String,
        /// Star rating
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        /// Review text
        #[arg(short, long)]
        text: String,
    },
    /// List reviews for a book
    List {
        /// Volume identifier
        id: String,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> Result<()> {
    let rt = Runtime::new()?;
    let config = config::load();

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.storage.resolved_data_dir());
    let store = StorageManager::new(&data_dir)?;
    let gateway = BookGateway::new(VolumesClient::with_base_url(
        &config.endpoints.volumes_base_url,
    ));
    let enrichment = EnrichmentService::new(OpenLibraryClient::with_base_urls(
        &config.endpoints.open_library_base_url,
        &config.endpoints.covers_base_url,
    ));

    match &cli.command {
        Commands::Search { query, genre, sort } => {
            cmd_search(&rt, &gateway, &store, query, genre.as_deref(), *sort)
        }
        Commands::Random { genre } => cmd_random(&rt, &gateway, &store, genre.as_deref()),
        Commands::Details { id, enrich } => {
            cmd_details(&rt, &gateway, &enrichment, &store, id, *enrich)
        }
        Commands::Author { name } => cmd_author(&rt, &enrichment, name),
        Commands::Recommend { id } => cmd_recommend(&rt, &gateway, &store, id),
        Commands::Favorites { action } => cmd_favorites(&rt, &gateway, &store, action),
        Commands::Review { action } => cmd_review(&store, action),
        Commands::Theme { theme } => cmd_theme(&store, theme.map(Theme::from)),
        Commands::History { clear } => cmd_history(&store, *clear),
        Commands::Reset => cmd_reset(&store),
        Commands::Config { init } => cmd_config(&config, &data_dir, *init),
    }
}
