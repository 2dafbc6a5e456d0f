//! Conversion between program titles and the URL slugs used in routes.
//!
//! A slug is the lower-cased title with spaces replaced by hyphens
//! (`The Walking Dead` -> `the-walking-dead`). Incoming slugs are turned back
//! into a display title by capitalising every hyphen-separated word, and the
//! lower-cased display title is the key used to look a program up.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

const SLUG_PATTERN: &str = r"^[a-z0-9-]+$";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("No slug has been sent to find a program in program's table.")]
    Missing,

    #[error("Slug '{0}' is not a valid program slug")]
    Invalid(String),
}

/// A slug that passed validation, decoded into the title forms the
/// controllers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlug {
    /// Title shown to the user, e.g. `The Walking Dead`.
    pub title: String,
    /// Case-folded title compared against `lower(program.title)`.
    pub lookup_key: String,
}

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SLUG_PATTERN).expect("Invalid slug regex"))
}

#[must_use]
pub fn is_valid(slug: &str) -> bool {
    slug_regex().is_match(slug)
}

/// Validates an optional route slug and decodes it.
///
/// Blank input is reported as [`SlugError::Missing`] so callers can answer
/// with a not-found page before touching the database.
pub fn resolve(slug: Option<&str>) -> Result<ResolvedSlug, SlugError> {
    let slug = slug.unwrap_or_default();
    if slug.trim().is_empty() {
        return Err(SlugError::Missing);
    }

    if !is_valid(slug) {
        return Err(SlugError::Invalid(slug.to_string()));
    }

    let title = to_title(slug);
    let lookup_key = to_lookup_key(&title);
    Ok(ResolvedSlug { title, lookup_key })
}

/// `the-walking-dead` -> `The Walking Dead`
#[must_use]
pub fn to_title(slug: &str) -> String {
    slug.trim()
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn to_lookup_key(title: &str) -> String {
    title.to_lowercase()
}

/// Builds the slug a program title is reachable under.
///
/// Characters outside `[a-z0-9-]` are dropped after lower-casing, and runs of
/// whitespace or hyphens collapse into a single hyphen.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = !slug.is_empty();
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(c);
        }
    }

    slug
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
