//! Adapter layer: Convert secondary-service DTOs to domain models.
//!
//! This is the ONLY place where secondary DTO types are converted to
//! domain types. If the secondary service changes its response format,
//! only this file and dto.rs need to change.

use super::domain::{AuthorDetails, SupplementalRecord};
use super::dto;

/// Convert an edition response into a supplemental record.
pub fn to_supplemental(edition: dto::EditionResponse) -> SupplementalRecord {
    let languages = edition
        .languages
        .iter()
        .map(|lang| {
            // "/languages/eng" -> "eng"; keep the raw key if the shape differs
            lang.key
                .rsplit('/')
                .next()
                .filter(|code| !code.is_empty())
                .unwrap_or(lang.key.as_str())
                .to_string()
        })
        .collect();

    SupplementalRecord {
        edition_key: edition.key,
        publishers: edition.publishers,
        number_of_pages: edition.number_of_pages,
        languages,
        first_sentence: edition.first_sentence.map(|s| s.value().to_string()),
        subjects: edition.subjects,
        publish_date: edition.publish_date,
    }
}

/// Convert an author detail response into [`AuthorDetails`].
pub fn to_author_details(author: dto::AuthorResponse) -> AuthorDetails {
    AuthorDetails {
        name: author.name.unwrap_or_else(|| "Unknown".to_string()),
        bio: author
            .bio
            .map(|b| b.value().to_string())
            .unwrap_or_else(|| "No biography available".to_string()),
        birth_date: author.birth_date,
        death_date: author.death_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_keys_reduced_to_codes() {
        let edition = dto::EditionResponse {
            key: Some("/books/OL1M".to_string()),
            title: None,
            publish_date: None,
            publishers: vec![],
            number_of_pages: None,
            subjects: vec![],
            languages: vec![
                dto::LanguageRef {
                    key: "/languages/eng".to_string(),
                },
                dto::LanguageRef {
                    key: "/languages/fre".to_string(),
                },
            ],
            first_sentence: None,
            description: None,
            isbn_13: vec![],
            isbn_10: vec![],
        };

        let supplemental = to_supplemental(edition);

        assert_eq!(supplemental.languages, vec!["eng".to_string(), "fre".to_string()]);
        assert_eq!(supplemental.edition_key.as_deref(), Some("/books/OL1M"));
    }

    #[test]
    fn test_first_sentence_extracted_from_either_shape() {
        let edition = dto::EditionResponse {
            key: None,
            title: None,
            publish_date: None,
            publishers: vec!["Ace Books".to_string()],
            number_of_pages: Some(528),
            subjects: vec![],
            languages: vec![],
            first_sentence: Some(dto::TextField::Typed {
                value: "It begins.".to_string(),
            }),
            description: None,
            isbn_13: vec![],
            isbn_10: vec![],
        };

        let supplemental = to_supplemental(edition);

        assert_eq!(supplemental.first_sentence.as_deref(), Some("It begins."));
        assert_eq!(supplemental.number_of_pages, Some(528));
    }

    #[test]
    fn test_author_bio_defaults_when_absent() {
        let author = dto::AuthorResponse {
            name: Some("Frank Herbert".to_string()),
            bio: None,
            birth_date: Some("8 October 1920".to_string()),
            death_date: None,
        };

        let details = to_author_details(author);

        assert_eq!(details.name, "Frank Herbert");
        assert_eq!(details.bio, "No biography available");
        assert_eq!(details.birth_date.as_deref(), Some("8 October 1920"));
    }
}
