//! Adapter layer: Convert volumes API DTOs to canonical records.
//!
//! This is the ONLY place where DTO types are converted to domain types,
//! and the only place normalization defaults live. If the volumes API
//! changes its response format, only this file and dto.rs need to change.
//!
//! Normalization guarantees (callers rely on these):
//! - `authors` and `genres` are never empty; a missing list gets one
//!   synthesized entry drawn from a fixed pool
//! - every optional scalar has an explicit default, never left unset
//! - the cover URL is picked by a fixed variant priority, else placeholder

use rand::seq::IndexedRandom;

use super::domain::{FALLBACK_AUTHORS, GENRES, PLACEHOLDER_COVER};
use super::dto;
use crate::model::{BookRecord, Identifier};

/// Convert a volume DTO into a canonical [`BookRecord`].
pub fn to_record(volume: dto::Volume) -> BookRecord {
    let info = volume.volume_info;

    let authors = if info.authors.is_empty() {
        vec![synthesize_author()]
    } else {
        info.authors
    };

    let genres = normalize_genres(&info.categories);
    let cover_image = pick_cover(info.image_links.as_ref());

    let identifiers: Vec<Identifier> = info
        .industry_identifiers
        .into_iter()
        .map(|id| Identifier::new(id.kind, id.identifier))
        .collect();
    let isbn = identifiers.first().map(|id| id.value.clone());

    BookRecord {
        id: volume.id,
        title: info.title.unwrap_or_else(|| "Untitled".to_string()),
        authors,
        description: info
            .description
            .unwrap_or_else(|| "No description available.".to_string()),
        cover_image,
        average_rating: info.average_rating.unwrap_or(0.0),
        published_date: info.published_date.unwrap_or_else(|| "Unknown".to_string()),
        genres,
        page_count: info.page_count.unwrap_or(0),
        language: info.language.unwrap_or_else(|| "en".to_string()),
        publisher: info.publisher.unwrap_or_else(|| "Unknown".to_string()),
        isbn,
        identifiers,
    }
}

/// Whether a raw search item carries a cover we consider displayable.
///
/// The random picker filters on this before normalization so placeholder
/// covers only appear when no strategy produced a real one.
pub fn has_usable_cover(volume: &dto::Volume) -> bool {
    volume
        .volume_info
        .image_links
        .as_ref()
        .is_some_and(|links| links.thumbnail.is_some())
}

/// Normalize slash-delimited category paths into display genre labels.
///
/// Takes the first path segment of each category, capitalizes each word,
/// and synthesizes one placeholder genre when the source has none.
fn normalize_genres(categories: &[String]) -> Vec<String> {
    let genres: Vec<String> = categories
        .iter()
        .map(|category| {
            let main = category.split('/').next().unwrap_or_default().trim();
            capitalize_words(main)
        })
        .filter(|g| !g.is_empty())
        .collect();

    if genres.is_empty() {
        vec![synthesize_genre()]
    } else {
        genres
    }
}

/// Capitalize the first letter of each whitespace-separated word and
/// lowercase the rest ("sCIENCE fICTION" -> "Science Fiction").
fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Choose a cover URL by variant priority, else the placeholder.
fn pick_cover(links: Option<&dto::ImageLinks>) -> String {
    let Some(links) = links else {
        return PLACEHOLDER_COVER.to_string();
    };

    links
        .thumbnail
        .as_ref()
        .or(links.small_thumbnail.as_ref())
        .or(links.small.as_ref())
        .or(links.medium.as_ref())
        .or(links.large.as_ref())
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_COVER.to_string())
}

fn synthesize_author() -> String {
    let mut rng = rand::rng();
    FALLBACK_AUTHORS
        .choose(&mut rng)
        .copied()
        .unwrap_or("Unknown Author")
        .to_string()
}

fn synthesize_genre() -> String {
    let mut rng = rand::rng();
    GENRES.choose(&mut rng).copied().unwrap_or("Fiction").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn volume(id: &str, info: dto::VolumeInfo) -> dto::Volume {
        dto::Volume {
            id: id.to_string(),
            volume_info: info,
        }
    }

    #[test]
    fn test_defaults_for_empty_volume() {
        let record = to_record(volume("v1", dto::VolumeInfo::default()));

        assert_eq!(record.id, "v1");
        assert_eq!(record.title, "Untitled");
        assert_eq!(record.description, "No description available.");
        assert_eq!(record.cover_image, PLACEHOLDER_COVER);
        assert_eq!(record.average_rating, 0.0);
        assert_eq!(record.published_date, "Unknown");
        assert_eq!(record.page_count, 0);
        assert_eq!(record.language, "en");
        assert_eq!(record.publisher, "Unknown");
        assert_eq!(record.isbn, None);
    }

    #[test]
    fn test_missing_authors_get_placeholder_from_pool() {
        let record = to_record(volume("v1", dto::VolumeInfo::default()));

        assert_eq!(record.authors.len(), 1);
        assert!(FALLBACK_AUTHORS.contains(&record.authors[0].as_str()));
    }

    #[test]
    fn test_missing_categories_get_placeholder_from_pool() {
        let record = to_record(volume("v1", dto::VolumeInfo::default()));

        assert_eq!(record.genres.len(), 1);
        assert!(GENRES.contains(&record.genres[0].as_str()));
    }

    /// The "dune" scenario: one category path, no image links.
    #[test]
    fn test_category_path_and_missing_cover() {
        let info = dto::VolumeInfo {
            title: Some("Dune".to_string()),
            authors: vec!["Frank Herbert".to_string()],
            categories: vec!["Fiction/Science Fiction".to_string()],
            ..Default::default()
        };

        let record = to_record(volume("dune-1", info));

        assert_eq!(record.genres, vec!["Fiction".to_string()]);
        assert_eq!(record.cover_image, PLACEHOLDER_COVER);
    }

    #[test]
    fn test_category_words_are_capitalized() {
        let info = dto::VolumeInfo {
            categories: vec![
                "young adult fiction / General".to_string(),
                "SCIENCE / Physics".to_string(),
            ],
            ..Default::default()
        };

        let record = to_record(volume("v1", info));

        assert_eq!(
            record.genres,
            vec!["Young Adult Fiction".to_string(), "Science".to_string()]
        );
    }

    #[test]
    fn test_cover_priority_prefers_thumbnail() {
        let info = dto::VolumeInfo {
            image_links: Some(dto::ImageLinks {
                small_thumbnail: Some("small-thumb".to_string()),
                thumbnail: Some("thumb".to_string()),
                large: Some("large".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let record = to_record(volume("v1", info));

        assert_eq!(record.cover_image, "thumb");
    }

    #[test]
    fn test_cover_falls_back_through_variants() {
        let info = dto::VolumeInfo {
            image_links: Some(dto::ImageLinks {
                medium: Some("medium".to_string()),
                large: Some("large".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let record = to_record(volume("v1", info));

        assert_eq!(record.cover_image, "medium");
    }

    #[test]
    fn test_identifiers_carried_and_first_becomes_isbn() {
        let info = dto::VolumeInfo {
            industry_identifiers: vec![
                dto::IndustryIdentifier {
                    kind: "ISBN_10".to_string(),
                    identifier: "0441172717".to_string(),
                },
                dto::IndustryIdentifier {
                    kind: "ISBN_13".to_string(),
                    identifier: "9780441172719".to_string(),
                },
            ],
            ..Default::default()
        };

        let record = to_record(volume("v1", info));

        assert_eq!(record.isbn.as_deref(), Some("0441172717"));
        assert_eq!(record.identifiers.len(), 2);
        assert_eq!(record.preferred_isbn(), Some("9780441172719"));
    }

    #[test]
    fn test_has_usable_cover_requires_thumbnail() {
        let with_thumb = volume(
            "a",
            dto::VolumeInfo {
                image_links: Some(dto::ImageLinks {
                    thumbnail: Some("t".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        let only_large = volume(
            "b",
            dto::VolumeInfo {
                image_links: Some(dto::ImageLinks {
                    large: Some("l".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        let bare = volume("c", dto::VolumeInfo::default());

        assert!(has_usable_cover(&with_thumb));
        assert!(!has_usable_cover(&only_large));
        assert!(!has_usable_cover(&bare));
    }

    proptest! {
        /// Normalization never yields empty author or genre lists,
        /// whatever the source sends.
        #[test]
        fn prop_authors_and_genres_never_empty(
            title in proptest::option::of(".{0,40}"),
            authors in proptest::collection::vec(".{0,20}", 0..4),
            categories in proptest::collection::vec(".{0,30}", 0..4),
        ) {
            let info = dto::VolumeInfo {
                title,
                authors,
                categories,
                ..Default::default()
            };
            let record = to_record(volume("v", info));
            prop_assert!(!record.authors.is_empty());
            prop_assert!(!record.genres.is_empty());
        }

        /// Capitalization is idempotent.
        #[test]
        fn prop_capitalize_idempotent(s in "[a-zA-Z ]{0,40}") {
            let once = capitalize_words(&s);
            prop_assert_eq!(capitalize_words(&once), once.clone());
        }
    }
}
