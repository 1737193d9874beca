//! Genre reports.
//!
//! Both reports key on the raw `genres` value, so a combined tag such as
//! `Comedy|Romance` is its own group. Records with a missing genres cell form
//! no group.

use crate::aggregate::{top_n_by_desc, GroupedRatings};
use ratings_core::{GenreCount, GenreRating, RatingRecord};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::debug;

/// Number of ratings per genre, most frequent first.
#[derive(Debug, Clone)]
pub struct GenreFrequencyReport {
    top_n: usize,
}

impl GenreFrequencyReport {
    /// Create a report that keeps the `top_n` most frequent genres.
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Count records per genre.
    ///
    /// Ties keep the order in which genres were first seen.
    pub fn compute(&self, records: &[RatingRecord]) -> Vec<GenreCount> {
        let mut counts: Vec<GenreCount> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for genres in records.iter().filter_map(RatingRecord::genres) {
            match index.get(genres) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(genres, counts.len());
                    counts.push(GenreCount {
                        genres: genres.to_string(),
                        count: 1,
                    });
                }
            }
        }

        let distinct = counts.len();
        counts.sort_by_key(|c| Reverse(c.count));
        counts.truncate(self.top_n);

        debug!(distinct, kept = counts.len(), "genre frequency report");
        counts
    }
}

/// Mean rating per genre, highest first, among genres with enough ratings.
#[derive(Debug, Clone)]
pub struct GenreRatingReport {
    top_n: usize,
}

impl GenreRatingReport {
    /// Create a report that keeps the `top_n` best rated genres.
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Group by genre and keep genres with at least `min_count` ratings.
    ///
    /// Ties on the mean keep genre-name order.
    pub fn compute(&self, records: &[RatingRecord], min_count: u32) -> Vec<GenreRating> {
        let grouped: GroupedRatings<&str> = records
            .iter()
            .filter_map(|r| r.genres().map(|genres| (genres, r.rating)))
            .collect();
        let groups = grouped.len();

        let eligible: Vec<GenreRating> = grouped
            .into_rows()
            .filter(|&(_, _, count)| count >= u64::from(min_count))
            .map(|(genres, mean, count)| GenreRating {
                genres: genres.to_string(),
                mean,
                count,
            })
            .collect();

        let top = top_n_by_desc(eligible, self.top_n, |g| g.mean);
        debug!(groups, min_count, kept = top.len(), "genre rating report");
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rec(genres: &str, rating: f64) -> RatingRecord {
        RatingRecord::new("Movie", genres, rating)
    }

    #[test]
    fn test_frequency_sorted_desc() {
        let records = vec![
            rec("Drama", 3.0),
            rec("Comedy", 3.0),
            rec("Comedy", 3.0),
            rec("Horror", 3.0),
            rec("Comedy", 3.0),
            rec("Drama", 3.0),
        ];

        let counts = GenreFrequencyReport::new(20).compute(&records);
        let names: Vec<_> = counts.iter().map(|c| c.genres.as_str()).collect();
        assert_eq!(names, vec!["Comedy", "Drama", "Horror"]);
        assert_eq!(counts[0].count, 3);
    }

    #[test]
    fn test_frequency_ties_first_seen() {
        let records = vec![rec("Western", 1.0), rec("Action", 1.0), rec("Musical", 1.0)];
        let counts = GenreFrequencyReport::new(20).compute(&records);
        let names: Vec<_> = counts.iter().map(|c| c.genres.as_str()).collect();
        assert_eq!(names, vec!["Western", "Action", "Musical"]);
    }

    #[test]
    fn test_frequency_capped() {
        let records: Vec<_> = (0..30)
            .flat_map(|i| (0..=i).map(move |_| rec(&format!("Genre{i}"), 3.0)))
            .collect();

        let counts = GenreFrequencyReport::new(20).compute(&records);
        assert_eq!(counts.len(), 20);
        assert_eq!(counts[0].genres, "Genre29");
        assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_frequency_skips_missing_genres() {
        let records = vec![rec("", 3.0).without_genres(), rec("Drama", 3.0)];
        let counts = GenreFrequencyReport::new(20).compute(&records);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].genres, "Drama");
    }

    #[test]
    fn test_frequency_counts_missing_ratings() {
        let records = vec![rec("Drama", 3.0), rec("Drama", f64::NAN)];
        let counts = GenreFrequencyReport::new(20).compute(&records);
        assert_eq!(counts[0].count, 2);
    }

    #[test]
    fn test_rating_skips_missing_ratings() {
        let records = vec![rec("Drama", 4.0), rec("Drama", f64::NAN), rec("Drama", 2.0)];
        let ratings = GenreRatingReport::new(10).compute(&records, 1);
        assert_relative_eq!(ratings[0].mean, 3.0);
        assert_eq!(ratings[0].count, 2);
    }

    #[test]
    fn test_rating_mean_and_count() {
        let records = vec![rec("Comedy", 4.0), rec("Comedy", 2.0)];
        let ratings = GenreRatingReport::new(10).compute(&records, 1);

        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].genres, "Comedy");
        assert_relative_eq!(ratings[0].mean, 3.0);
        assert_eq!(ratings[0].count, 2);
    }

    #[test]
    fn test_rating_threshold() {
        let records = vec![
            rec("Comedy", 2.0),
            rec("Comedy", 3.0),
            rec("Comedy", 4.0),
            rec("Documentary", 5.0),
        ];

        let ratings = GenreRatingReport::new(10).compute(&records, 3);
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].genres, "Comedy");

        let ratings = GenreRatingReport::new(10).compute(&records, 1);
        assert_eq!(ratings[0].genres, "Documentary");
    }

    #[test]
    fn test_rating_sorted_and_capped() {
        let records: Vec<_> = (0..15)
            .map(|i| rec(&format!("G{i:02}"), f64::from(i) / 3.0))
            .collect();

        let ratings = GenreRatingReport::new(10).compute(&records, 1);
        assert_eq!(ratings.len(), 10);
        assert_eq!(ratings[0].genres, "G14");
        assert!(ratings.windows(2).all(|w| w[0].mean >= w[1].mean));
    }

    #[test]
    fn test_rating_ties_in_name_order() {
        let records = vec![rec("Western", 4.0), rec("Action", 4.0)];
        let ratings = GenreRatingReport::new(10).compute(&records, 1);
        assert_eq!(ratings[0].genres, "Action");
        assert_eq!(ratings[1].genres, "Western");
    }
}
