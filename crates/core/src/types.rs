//! Core data types for the movie-ratings report.

use serde::{Deserialize, Serialize};

/// Release year extracted from a title.
pub type Year = i32;

/// A single rating observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Movie title (cleaned after normalization). `None` when the cell was
    /// empty or an NA marker; an empty string is a real, if odd, title.
    pub title: Option<String>,
    /// Release year, if the raw title carried one.
    pub year: Option<Year>,
    /// Genre tag, possibly a combined multi-genre value like `Comedy|Drama`.
    pub genres: Option<String>,
    /// Rating value. NaN when the cell was missing.
    pub rating: f64,
}

impl RatingRecord {
    /// Create a record with no year.
    pub fn new(title: impl Into<String>, genres: impl Into<String>, rating: f64) -> Self {
        Self {
            title: Some(title.into()),
            year: None,
            genres: Some(genres.into()),
            rating,
        }
    }

    /// Set the year.
    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    /// Mark the title cell as missing.
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    /// Mark the genres cell as missing.
    pub fn without_genres(mut self) -> Self {
        self.genres = None;
        self
    }

    /// Title, if present.
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Genre tag, if present.
    #[inline]
    pub fn genres(&self) -> Option<&str> {
        self.genres.as_deref()
    }
}

/// Number of ratings for one genre tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genres: String,
    pub count: u64,
}

/// Mean rating and count for one genre tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreRating {
    pub genres: String,
    pub mean: f64,
    pub count: u64,
}

/// Mean rating for one release year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRating {
    pub year: Year,
    pub mean: f64,
}

/// Mean rating and count for one (title, year) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieStats {
    pub title: String,
    pub year: Year,
    pub mean: f64,
    pub count: u64,
}

impl MovieStats {
    /// Display label, e.g. `"Jungle Book (1967)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

/// Round to two decimals for tabular display.
///
/// Exact halves go to the even digit, so 3.125 becomes 3.12.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
