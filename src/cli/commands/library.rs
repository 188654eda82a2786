//! Local-collection commands: favorites, reviews, theme, search history.

use tokio::runtime::Runtime;

use super::{FavoritesAction, ReviewAction};
use crate::config::{self, Config};
use crate::error::{Result, ResultExt};
use crate::gateway::BookGateway;
use crate::store::{StorageManager, Theme};

/// Manage the favorites collection.
pub fn cmd_favorites(
    rt: &Runtime,
    gateway: &BookGateway,
    store: &StorageManager,
    action: &FavoritesAction,
) -> Result<()> {
    match action {
        FavoritesAction::List => {
            let favorites = store.favorites();
            if favorites.is_empty() {
                println!("No favorite books yet. Add some books to your favorites!");
            } else {
                for book in &favorites {
                    println!(
                        "* {} - {} (id: {})",
                        book.title,
                        book.authors.join(", "),
                        book.id
                    );
                }
            }
        }
        FavoritesAction::Add { id } => {
            // Fetch the full record so the favorite renders offline later
            let book = rt.block_on(gateway.details(id))?;
            store
                .add_favorite(&book)
                .with_context(format!("while favoriting {id}"))?;
            println!("Added \"{}\" to favorites.", book.title);
        }
        FavoritesAction::Remove { id } => {
            store.remove_favorite(id)?;
            println!("Removed {id} from favorites.");
        }
    }
    Ok(())
}

/// Add or list local reviews.
pub fn cmd_review(store: &StorageManager, action: &ReviewAction) -> Result<()> {
    match action {
        ReviewAction::Add { id, rating, text } => {
            let review = store.add_review(id, *rating, text.clone())?;
            println!("Saved {}-star review for {id}.", review.rating);
        }
        ReviewAction::List { id } => {
            let reviews = store.reviews(id);
            if reviews.is_empty() {
                println!("No reviews yet for {id}.");
                return Ok(());
            }
            for review in &reviews {
                println!(
                    "[{}] {}/5  {}",
                    review.date.format("%Y-%m-%d"),
                    review.rating,
                    review.text
                );
            }
            println!(
                "\nAverage: {:.1}/5 over {} review(s)",
                store.average_rating(id),
                reviews.len()
            );
        }
    }
    Ok(())
}

/// Show or set the persisted theme.
pub fn cmd_theme(store: &StorageManager, theme: Option<Theme>) -> Result<()> {
    match theme {
        Some(theme) => {
            store.set_theme(theme)?;
            println!("Theme set to {theme}.");
        }
        None => println!("Current theme: {}", store.theme()),
    }
    Ok(())
}

/// Show or clear the recent-search list.
pub fn cmd_history(store: &StorageManager, clear: bool) -> Result<()> {
    if clear {
        store.clear_search_history()?;
        println!("Search history cleared.");
        return Ok(());
    }

    let history = store.search_history();
    if history.is_empty() {
        println!("No recent searches.");
    } else {
        for (i, query) in history.iter().enumerate() {
            println!("{:2}. {query}", i + 1);
        }
    }
    Ok(())
}

/// Wipe every persisted collection.
pub fn cmd_reset(store: &StorageManager) -> Result<()> {
    store.clear_all().with_context("while wiping local data")?;
    println!("All local data cleared.");
    Ok(())
}

/// Show the effective configuration, or write a default config file.
pub fn cmd_config(config: &Config, data_dir: &std::path::Path, init: bool) -> Result<()> {
    if init {
        match config::config_path() {
            Some(path) if path.exists() => {
                println!("Config already exists at {}", path.display());
            }
            _ => {
                config::save(&Config::default())?;
                if let Some(path) = config::config_path() {
                    println!("Wrote default config to {}", path.display());
                }
            }
        }
        return Ok(());
    }

    println!("volumes:      {}", config.endpoints.volumes_base_url);
    println!("open library: {}", config.endpoints.open_library_base_url);
    println!("covers:       {}", config.endpoints.covers_base_url);
    println!("data dir:     {}", data_dir.display());
    if let Some(path) = config::config_path() {
        println!("config file:  {}", path.display());
    }
    Ok(())
}
