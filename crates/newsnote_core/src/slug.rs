//! Slug assignment and deterministic slugify transform.
//!
//! # Responsibility
//! - Validate caller-requested slugs against the known slug set.
//! - Derive a slug from the title when no slug is requested.
//!
//! # Invariants
//! - `assign` and `slugify` are pure: identical inputs always yield
//!   identical outputs, with no hidden randomness.
//! - Requested slugs are matched case-sensitively and exactly.
//! - Derived slugs are NOT checked against the existing set; two notes with
//!   identical titles and no requested slug collide at the storage
//!   constraint instead. Known limitation, kept to preserve the observed
//!   behavior of the system this core replaces.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SLUG_MAX_CHARS: usize = 100;

static NON_SLUG_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug charset regex"));

/// Slug assignment failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The requested slug is already taken; carries the offending value so
    /// the caller can format a user-facing message.
    Duplicate(String),
}

impl Display for SlugError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(value) => write!(f, "slug `{value}` is already in use"),
        }
    }
}

impl Error for SlugError {}

/// Picks the slug for a note.
///
/// A non-empty `requested` slug is returned verbatim unless it is present
/// in `existing`. An absent or blank request falls back to
/// `slugify(title)`, which is deliberately not checked against `existing`.
pub fn assign(
    requested: Option<&str>,
    title: &str,
    existing: &HashSet<String>,
) -> Result<String, SlugError> {
    match requested.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => {
            if existing.contains(value) {
                Err(SlugError::Duplicate(value.to_string()))
            } else {
                Ok(value.to_string())
            }
        }
        None => Ok(slugify(title)),
    }
}

/// Derives a URL-safe ASCII slug from free-form text.
///
/// Rules:
/// - Cyrillic letters transliterate to their Latin counterparts.
/// - Everything is lowercased.
/// - Runs of characters outside `[a-z0-9]` collapse to single hyphens.
/// - Leading/trailing hyphens are trimmed; result caps at 100 chars.
pub fn slugify(title: &str) -> String {
    let mut transliterated = String::with_capacity(title.len());
    for ch in title.chars() {
        for lower in ch.to_lowercase() {
            match transliterate(lower) {
                Some(mapped) => transliterated.push_str(mapped),
                None => transliterated.push(lower),
            }
        }
    }

    let hyphenated = NON_SLUG_RUN_RE.replace_all(&transliterated, "-");
    hyphenated
        .trim_matches('-')
        .chars()
        .take(SLUG_MAX_CHARS)
        .collect()
}

/// Maps one lowercase Cyrillic letter to its Latin transliteration.
///
/// Letters that vanish in transliteration (hard/soft signs) map to the
/// empty string; non-Cyrillic input returns `None` and passes through.
fn transliterate(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::{assign, slugify, SlugError};
    use std::collections::HashSet;

    fn existing(values: &[&str]) -> HashSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn requested_slug_is_returned_verbatim_when_free() {
        let slug = assign(Some("my-slug"), "ignored title", &existing(&[])).unwrap();
        assert_eq!(slug, "my-slug");
    }

    #[test]
    fn requested_slug_collision_carries_the_value() {
        let err = assign(Some("taken"), "title", &existing(&["taken"])).unwrap_err();
        assert_eq!(err, SlugError::Duplicate("taken".to_string()));
    }

    #[test]
    fn slug_match_is_case_sensitive() {
        let slug = assign(Some("Taken"), "title", &existing(&["taken"])).unwrap();
        assert_eq!(slug, "Taken");
    }

    #[test]
    fn blank_request_falls_back_to_title() {
        let slug = assign(Some("   "), "Some Title", &existing(&[])).unwrap();
        assert_eq!(slug, "some-title");
    }

    #[test]
    fn derived_slug_skips_existing_check() {
        // Documented limitation: derivation does not consult the set.
        let slug = assign(None, "Some Title", &existing(&["some-title"])).unwrap();
        assert_eq!(slug, "some-title");
    }

    #[test]
    fn slugify_transliterates_cyrillic() {
        assert_eq!(slugify("Привет Мир"), "privet-mir");
        assert_eq!(slugify("Ёжик в тумане"), "ezhik-v-tumane");
    }

    #[test]
    fn slugify_collapses_punctuation_and_whitespace() {
        assert_eq!(slugify("  Hello,   World! "), "hello-world");
        assert_eq!(slugify("a--b__c"), "a-b-c");
    }

    #[test]
    fn slugify_is_deterministic() {
        assert_eq!(slugify("Repeatable Title"), slugify("Repeatable Title"));
    }

    #[test]
    fn slugify_caps_length() {
        let long_title = "x".repeat(500);
        assert_eq!(slugify(&long_title).chars().count(), 100);
    }
}
