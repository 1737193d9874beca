//! Record filtering.

use ratings_core::RatingRecord;

/// Placeholder value used in the dataset for missing titles and genres.
const UNKNOWN: &str = "unknown";

/// Which field caused a record to be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UnknownTitle,
    UnknownGenres,
}

/// Drops records whose title or genres is `unknown` in any letter-casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter;

impl RecordFilter {
    /// Create a new filter.
    pub fn new() -> Self {
        Self
    }

    /// Check whether a value is the `unknown` placeholder.
    #[inline]
    pub fn is_unknown(value: &str) -> bool {
        value.to_lowercase() == UNKNOWN
    }

    /// Classify a record. Title is checked before genres; missing cells pass.
    pub fn check(&self, record: &RatingRecord) -> Result<(), Rejection> {
        if record.title().is_some_and(Self::is_unknown) {
            Err(Rejection::UnknownTitle)
        } else if record.genres().is_some_and(Self::is_unknown) {
            Err(Rejection::UnknownGenres)
        } else {
            Ok(())
        }
    }

    /// Whether the record should be kept.
    pub fn keep(&self, record: &RatingRecord) -> bool {
        self.check(record).is_ok()
    }
}
