//! Aggregate reports for the movie-ratings dashboard.
//!
//! This crate handles:
//! - Group-by mean/count accumulation
//! - Genre frequency and genre rating reports
//! - Yearly rating trend
//! - Top rated movies
//! - The report engine that runs all of them

pub mod aggregate;
pub mod engine;
pub mod genre;
pub mod movies;
pub mod trend;

pub use aggregate::{GroupStats, GroupedRatings};
pub use engine::{ReportEngine, ReportSet};
pub use genre::{GenreFrequencyReport, GenreRatingReport};
pub use movies::TopMoviesReport;
pub use trend::YearlyTrendReport;
