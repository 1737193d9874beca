//! Yearly rating trend.

use crate::aggregate::GroupedRatings;
use ratings_core::{RatingRecord, Year, YearlyRating};
use tracing::debug;

/// Mean rating per release year, in year order.
#[derive(Debug, Clone, Default)]
pub struct YearlyTrendReport;

impl YearlyTrendReport {
    pub fn new() -> Self {
        Self
    }

    /// Records without a year are dropped.
    pub fn compute(&self, records: &[RatingRecord]) -> Vec<YearlyRating> {
        let grouped: GroupedRatings<Year> = records
            .iter()
            .filter_map(|r| r.year.map(|year| (year, r.rating)))
            .collect();

        let trend: Vec<YearlyRating> = grouped
            .into_rows()
            .map(|(year, mean, _)| YearlyRating { year, mean })
            .collect();

        debug!(years = trend.len(), "yearly trend report");
        trend
    }
}
