//! Network-backed commands: search, random pick, details, author lookup,
//! and recommendations.

use tokio::runtime::Runtime;

use super::SortOrder;
use crate::enrichment::{EnrichedBookRecord, EnrichmentService};
use crate::error::Result;
use crate::gateway::BookGateway;
use crate::model::BookRecord;
use crate::store::StorageManager;

/// Search the catalog and print the result cards.
pub fn cmd_search(
    rt: &Runtime,
    gateway: &BookGateway,
    store: &StorageManager,
    query: &str,
    genre: Option<&str>,
    sort: SortOrder,
) -> Result<()> {
    let books = rt.block_on(gateway.search(query, genre))?;
    store.add_search_history(query)?;

    if books.is_empty() {
        match genre {
            Some(g) if g != "all" => println!(
                "No books found for \"{query}\" in the {g} genre. Try a different search term or genre."
            ),
            _ => println!("No books found for \"{query}\". Try a different search term."),
        }
        return Ok(());
    }

    let books = sort_books(books, sort);
    for book in &books {
        print_card(book, store);
    }

    match genre {
        Some(g) if g != "all" => println!("\nFound {} books for \"{query}\" in {g}", books.len()),
        _ => println!("\nFound {} books for \"{query}\"", books.len()),
    }
    Ok(())
}

/// Pick and print a random book.
pub fn cmd_random(
    rt: &Runtime,
    gateway: &BookGateway,
    store: &StorageManager,
    genre: Option<&str>,
) -> Result<()> {
    let book = rt.block_on(gateway.random(genre))?;
    print_card(&book, store);
    Ok(())
}

/// Print full details for one book, optionally enriched from the
/// secondary source.
pub fn cmd_details(
    rt: &Runtime,
    gateway: &BookGateway,
    enrichment: &EnrichmentService,
    store: &StorageManager,
    id: &str,
    enrich: bool,
) -> Result<()> {
    let record = rt.block_on(gateway.details(id))?;

    let enriched = if enrich {
        rt.block_on(enrichment.enrich(record))
    } else {
        EnrichedBookRecord::bare(record)
    };

    print_details(&enriched, store);
    Ok(())
}

/// Resolve and print author details from the secondary source.
pub fn cmd_author(rt: &Runtime, enrichment: &EnrichmentService, name: &str) -> Result<()> {
    match rt.block_on(enrichment.resolve_author(name)) {
        Some(author) => {
            println!("{}", author.name);
            if let Some(born) = &author.birth_date {
                match &author.death_date {
                    Some(died) => println!("  {born} - {died}"),
                    None => println!("  born {born}"),
                }
            }
            println!("  {}", author.bio);
        }
        None => println!("No author found for \"{name}\"."),
    }
    Ok(())
}

/// Print recommendations seeded from one book.
pub fn cmd_recommend(
    rt: &Runtime,
    gateway: &BookGateway,
    store: &StorageManager,
    id: &str,
) -> Result<()> {
    let recs = rt.block_on(gateway.recommendations(id))?;

    if recs.by_genre.is_empty() && recs.by_author.is_empty() {
        println!("No recommendations found.");
        return Ok(());
    }

    if !recs.by_genre.is_empty() {
        println!("More in this genre:");
        for book in &recs.by_genre {
            print_card(book, store);
        }
    }
    if !recs.by_author.is_empty() {
        println!("More by this author:");
        for book in &recs.by_author {
            print_card(book, store);
        }
    }
    Ok(())
}

// ============================================================================
// Rendering and sorting
// ============================================================================

/// Print one result card.
fn print_card(book: &BookRecord, store: &StorageManager) {
    let marker = if store.is_favorite(&book.id) { "*" } else { " " };
    println!(
        "{marker} {} ({}) - {}",
        book.title,
        book.published_date,
        book.authors.join(", ")
    );
    println!(
        "    id: {} | {} | rating: {:.1}",
        book.id,
        book.genres.join(", "),
        book.average_rating
    );
}

/// Print a full details block.
fn print_details(enriched: &EnrichedBookRecord, store: &StorageManager) {
    let book = &enriched.record;

    print_card(book, store);
    println!("    publisher: {} | pages: {}", book.publisher, book.page_count);
    println!("    language: {}", book.language);
    if let Some(isbn) = &book.isbn {
        println!("    isbn: {isbn}");
    }
    println!("    cover: {}", book.cover_image);
    println!();
    println!("{}", book.description);

    if let Some(supplemental) = &enriched.supplemental {
        println!();
        println!("From the secondary source:");
        if !supplemental.publishers.is_empty() {
            println!("    publishers: {}", supplemental.publishers.join(", "));
        }
        if let Some(pages) = supplemental.number_of_pages {
            println!("    pages: {pages}");
        }
        if !supplemental.languages.is_empty() {
            println!("    languages: {}", supplemental.languages.join(", "));
        }
        if let Some(sentence) = &supplemental.first_sentence {
            println!("    opening line: {sentence}");
        }
    }
    if let Some(cover) = &enriched.enhanced_cover {
        println!("    large cover: {cover}");
    }

    let reviews = store.reviews(&book.id);
    if !reviews.is_empty() {
        println!();
        println!(
            "Your reviews: {} (average {:.1}/5)",
            reviews.len(),
            store.average_rating(&book.id)
        );
    }
}

/// Order a result set for display.
pub(super) fn sort_books(mut books: Vec<BookRecord>, sort: SortOrder) -> Vec<BookRecord> {
    match sort {
        SortOrder::Relevance => {}
        SortOrder::Newest => {
            books.sort_by(|a, b| date_key(&b.published_date).cmp(&date_key(&a.published_date)));
        }
        SortOrder::Rating => {
            books.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
        }
    }
    books
}

/// Sort key for free-form published dates ("1965", "1965-08", "1965-08-01").
/// Unknown or unparsable dates sort as 1900-01-01, i.e. last under `Newest`.
fn date_key(date: &str) -> (i32, u8, u8) {
    let mut parts = date.splitn(3, '-').map(|p| p.trim().parse().ok());
    let year: Option<i32> = parts.next().flatten();
    let Some(year) = year else {
        return (1900, 1, 1);
    };
    let month = parts.next().flatten().unwrap_or(1) as u8;
    let day = parts.next().flatten().unwrap_or(1) as u8;
    (year, month, day)
}
