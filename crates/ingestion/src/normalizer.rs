//! Title normalization.
//!
//! Splits a raw title such as `"Jungle Book, The (1967)"` into a clean title
//! (`"Jungle Book"`) and a release year (`1967`).

use ratings_core::{Error, RatingRecord, Result, Year};
use regex::Regex;

/// Trailing articles, removed in this order.
const TRAILING_ARTICLES: [&str; 3] = [", The", ", A", ", An"];

/// Result of normalizing one raw title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTitle {
    pub title: String,
    pub year: Option<Year>,
}

/// Title normalizer.
pub struct TitleNormalizer {
    /// First parenthesized 4-digit group anywhere in the title.
    year_pattern: Regex,
    /// Parenthesized 4-digit group at the end, with leading whitespace.
    year_suffix: Regex,
}

impl TitleNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| Error::config(format!("bad title pattern: {e}")))
        };

        Ok(Self {
            year_pattern: compile(r"\(([0-9]{4})\)")?,
            year_suffix: compile(r"\s*\([0-9]{4}\)$")?,
        })
    }

    /// Extract the release year, if any.
    pub fn extract_year(&self, raw: &str) -> Option<Year> {
        self.year_pattern
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Normalize a raw title.
    ///
    /// The year suffix is stripped before the articles, so
    /// `"Jungle Book, The (1967)"` loses both.
    pub fn normalize(&self, raw: &str) -> NormalizedTitle {
        let year = self.extract_year(raw);
        let mut title = self.year_suffix.replace(raw, "").into_owned();

        for article in TRAILING_ARTICLES {
            if let Some(keep) = title.strip_suffix(article).map(str::len) {
                title.truncate(keep);
            }
        }

        NormalizedTitle { title, year }
    }

    /// Normalize a record in place. A missing title stays missing and has no
    /// year.
    pub fn apply(&self, record: &mut RatingRecord) {
        match record.title.as_deref().map(|raw| self.normalize(raw)) {
            Some(normalized) => {
                record.title = Some(normalized.title);
                record.year = normalized.year;
            }
            None => record.year = None,
        }
    }
}
