//! Cleaning stage: title normalization followed by filtering.

use crate::filter::{RecordFilter, Rejection};
use crate::normalizer::TitleNormalizer;
use ratings_core::{RatingRecord, Result};
use tracing::debug;

/// Statistics about a cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningStats {
    /// Records received.
    pub input_records: u64,
    /// Records dropped for an `unknown` title.
    pub unknown_titles: u64,
    /// Records dropped for an `unknown` genre tag.
    pub unknown_genres: u64,
    /// Kept records that carry a release year.
    pub with_year: u64,
    /// Records kept.
    pub output_records: u64,
}

impl CleaningStats {
    /// Total records dropped.
    pub fn dropped(&self) -> u64 {
        self.unknown_titles + self.unknown_genres
    }
}

/// Normalizes titles and drops `unknown` records.
pub struct Cleaner {
    normalizer: TitleNormalizer,
    filter: RecordFilter,
    stats: CleaningStats,
}

impl Cleaner {
    /// Create a new cleaner.
    pub fn new() -> Result<Self> {
        Ok(Self {
            normalizer: TitleNormalizer::new()?,
            filter: RecordFilter::new(),
            stats: CleaningStats::default(),
        })
    }

    /// Clean a batch of raw records.
    pub fn clean(&mut self, records: Vec<RatingRecord>) -> Vec<RatingRecord> {
        self.stats.input_records += records.len() as u64;

        let mut kept = Vec::with_capacity(records.len());
        for mut record in records {
            self.normalizer.apply(&mut record);

            match self.filter.check(&record) {
                Ok(()) => {
                    if record.year.is_some() {
                        self.stats.with_year += 1;
                    }
                    kept.push(record);
                }
                Err(Rejection::UnknownTitle) => self.stats.unknown_titles += 1,
                Err(Rejection::UnknownGenres) => self.stats.unknown_genres += 1,
            }
        }

        self.stats.output_records += kept.len() as u64;
        debug!(
            kept = kept.len(),
            unknown_titles = self.stats.unknown_titles,
            unknown_genres = self.stats.unknown_genres,
            "cleaned ratings"
        );
        kept
    }

    /// Get cleaning statistics.
    pub fn stats(&self) -> &CleaningStats {
        &self.stats
    }
}
