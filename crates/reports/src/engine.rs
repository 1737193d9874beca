//! Report engine.
//!
//! Runs every report over one set of cleaned records.

use crate::{
    genre::{GenreFrequencyReport, GenreRatingReport},
    movies::TopMoviesReport,
    trend::YearlyTrendReport,
};
use ratings_core::{
    config::ReportConfig, GenreCount, GenreRating, MovieStats, RatingRecord, Thresholds,
    YearlyRating,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Output of one engine run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSet {
    /// Thresholds the run used.
    pub thresholds: Thresholds,
    /// Records the run aggregated.
    pub record_count: usize,
    /// Most frequent genres.
    pub genre_counts: Vec<GenreCount>,
    /// Best rated genres.
    pub genre_ratings: Vec<GenreRating>,
    /// Mean rating by year.
    pub yearly: Vec<YearlyRating>,
    /// Best rated movies.
    pub top_movies: Vec<MovieStats>,
}

/// Report engine.
pub struct ReportEngine {
    genre_frequency: GenreFrequencyReport,
    genre_rating: GenreRatingReport,
    yearly: YearlyTrendReport,
    top_movies: TopMoviesReport,
}

impl ReportEngine {
    /// Create a new engine from configuration.
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            genre_frequency: GenreFrequencyReport::new(config.top_genres),
            genre_rating: GenreRatingReport::new(config.top_rated_genres),
            yearly: YearlyTrendReport::new(),
            top_movies: TopMoviesReport::new(config.top_movies),
        }
    }

    /// Compute every report.
    pub fn run(&self, records: &[RatingRecord], thresholds: Thresholds) -> ReportSet {
        let report = ReportSet {
            thresholds,
            record_count: records.len(),
            genre_counts: self.genre_frequency.compute(records),
            genre_ratings: self
                .genre_rating
                .compute(records, thresholds.genre_min_ratings),
            yearly: self.yearly.compute(records),
            top_movies: self
                .top_movies
                .compute(records, thresholds.movie_min_ratings),
        };

        info!(
            records = report.record_count,
            genre_min_ratings = thresholds.genre_min_ratings,
            movie_min_ratings = thresholds.movie_min_ratings,
            "computed reports"
        );
        report
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new(&ReportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<RatingRecord> {
        let mut records = Vec::new();
        for i in 0..60 {
            let rating = 4.0 + f64::from(i % 2) * 0.5;
            records.push(RatingRecord::new("Heat", "Action|Crime", rating).with_year(1995));
        }
        for _ in 0..120 {
            records.push(RatingRecord::new("Airplane!", "Comedy", 3.5).with_year(1980));
        }
        records.push(RatingRecord::new("Solaris", "Drama|Sci-Fi", 5.0).with_year(1972));
        records
    }

    #[test]
    fn test_default_thresholds() {
        let engine = ReportEngine::default();
        let report = engine.run(&sample_records(), Thresholds::default());

        assert_eq!(report.record_count, 181);
        assert_eq!(report.genre_counts.len(), 3);
        assert_eq!(report.genre_counts[0].genres, "Comedy");

        // Only Comedy reaches 100 ratings.
        assert_eq!(report.genre_ratings.len(), 1);
        assert_eq!(report.genre_ratings[0].genres, "Comedy");

        assert_eq!(report.yearly.len(), 3);
        assert_eq!(report.yearly[0].year, 1972);

        // Solaris has one rating and falls below 50.
        let titles: Vec<_> = report.top_movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Heat", "Airplane!"]);
    }

    #[test]
    fn test_low_thresholds() {
        let engine = ReportEngine::default();
        let thresholds = Thresholds {
            genre_min_ratings: 1,
            movie_min_ratings: 1,
        };
        let report = engine.run(&sample_records(), thresholds);

        assert_eq!(report.genre_ratings[0].genres, "Drama|Sci-Fi");
        assert_eq!(report.top_movies[0].label(), "Solaris (1972)");
        assert_eq!(report.thresholds, thresholds);
    }
}
