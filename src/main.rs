//! Book Scout - a book discovery client for the terminal.
//!
//! Searches a public book-metadata service, merges in a secondary source,
//! and keeps local favorites, reviews, and a theme preference. All
//! commands run through the CLI; see `book-scout --help`.

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod gateway;
pub mod model;
pub mod store;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("book_scout=info".parse().unwrap()))
        .init();

    cli::run_command(&args)?;
    Ok(())
}
