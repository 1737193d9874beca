//! Top rated movies.

use crate::aggregate::{top_n_by_desc, GroupedRatings};
use ratings_core::{MovieStats, RatingRecord, Year};
use tracing::debug;

/// Best rated (title, year) pairs among those with enough ratings.
#[derive(Debug, Clone)]
pub struct TopMoviesReport {
    top_n: usize,
}

impl TopMoviesReport {
    /// Create a report that keeps the `top_n` best rated movies.
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Group by (title, year) and keep pairs with at least `min_count` ratings.
    ///
    /// Records missing a title or a year form no group. Ties on the mean keep
    /// (title, year) order.
    pub fn compute(&self, records: &[RatingRecord], min_count: u32) -> Vec<MovieStats> {
        let grouped: GroupedRatings<(&str, Year)> = records
            .iter()
            .filter_map(|r| Some(((r.title()?, r.year?), r.rating)))
            .collect();
        let groups = grouped.len();

        let eligible: Vec<MovieStats> = grouped
            .into_rows()
            .filter(|&(_, _, count)| count >= u64::from(min_count))
            .map(|((title, year), mean, count)| MovieStats {
                title: title.to_string(),
                year,
                mean,
                count,
            })
            .collect();

        let top = top_n_by_desc(eligible, self.top_n, |m| m.mean);
        debug!(groups, min_count, kept = top.len(), "top movies report");
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ratings(title: &str, year: Year, values: &[f64]) -> Vec<RatingRecord> {
        values
            .iter()
            .map(|&v| RatingRecord::new(title, "Drama", v).with_year(year))
            .collect()
    }

    #[test]
    fn test_threshold_excludes_sparse_movies() {
        let mut records = ratings("Heat", 1995, &[4.0, 4.0, 5.0]);
        records.extend(ratings("Obscure", 2003, &[5.0]));

        let top = TopMoviesReport::new(5).compute(&records, 2);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].title, "Heat");
        assert_relative_eq!(top[0].mean, 13.0 / 3.0);
        assert_eq!(top[0].count, 3);
    }

    #[test]
    fn test_same_title_different_years() {
        let mut records = ratings("Hamlet", 1948, &[4.0, 4.0]);
        records.extend(ratings("Hamlet", 1996, &[3.0, 3.0]));

        let top = TopMoviesReport::new(5).compute(&records, 1);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].label(), "Hamlet (1948)");
        assert_eq!(top[1].label(), "Hamlet (1996)");
    }

    #[test]
    fn test_missing_year_excluded() {
        let records = vec![RatingRecord::new("Godfather", "Crime", 5.0)];
        assert!(TopMoviesReport::new(5).compute(&records, 1).is_empty());
    }

    #[test]
    fn test_empty_title_is_a_group() {
        let records = ratings("", 1995, &[4.0, 3.0]);
        let top = TopMoviesReport::new(5).compute(&records, 2);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].title, "");
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn test_missing_title_excluded() {
        let records = vec![RatingRecord::new("", "Drama", 4.0).without_title().with_year(1995)];
        assert!(TopMoviesReport::new(5).compute(&records, 1).is_empty());
    }

    #[test]
    fn test_sorted_and_capped() {
        let records: Vec<_> = (0..8)
            .flat_map(|i| ratings(&format!("Film {i}"), 2000 + i, &[f64::from(i) * 0.5]))
            .collect();

        let top = TopMoviesReport::new(5).compute(&records, 1);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].title, "Film 7");
        assert!(top.windows(2).all(|w| w[0].mean >= w[1].mean));
    }
}
