//! Command-line interface for book-scout.
//!
//! This module provides the commands for searching, random picks, details
//! with enrichment, and the local favorites/reviews/theme collections.

mod commands;

pub use commands::{Cli, Commands, run_command};
