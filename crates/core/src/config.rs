//! Configuration structures for the movie-ratings report.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input data configuration.
    pub data: DataConfig,
    /// Threshold control bounds.
    pub thresholds: ThresholdConfig,
    /// Report sizing configuration.
    pub reports: ReportConfig,
}

impl Config {
    /// Load a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every bound and axis is internally consistent.
    pub fn validate(&self) -> Result<()> {
        self.thresholds.genre_min_ratings.validate("genre_min_ratings")?;
        self.thresholds.movie_min_ratings.validate("movie_min_ratings")?;

        let [lower, upper] = self.reports.rating_axis;
        if !(lower < upper) {
            return Err(Error::config(format!(
                "rating_axis lower bound {lower} must be below upper bound {upper}"
            )));
        }
        Ok(())
    }

    /// Default thresholds for a fresh session.
    pub fn default_thresholds(&self) -> Thresholds {
        Thresholds {
            genre_min_ratings: self.thresholds.genre_min_ratings.default,
            movie_min_ratings: self.thresholds.movie_min_ratings.default,
        }
    }
}

/// Input data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the ratings CSV.
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "Week-03-EDA-and-Dashboards/data/movie_ratings.csv".to_string(),
        }
    }
}

/// Bounds for a numeric threshold control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdBounds {
    /// Smallest accepted value.
    pub min: u32,
    /// Largest accepted value.
    pub max: u32,
    /// Value used before any input.
    pub default: u32,
    /// Increment of the control.
    pub step: u32,
}

impl ThresholdBounds {
    /// Clamp a requested value into `[min, max]`.
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.min > self.max {
            return Err(Error::config(format!(
                "{name}: min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if self.default < self.min || self.default > self.max {
            return Err(Error::config(format!(
                "{name}: default {} outside [{}, {}]",
                self.default, self.min, self.max
            )));
        }
        if self.step == 0 {
            return Err(Error::config(format!("{name}: step must be positive")));
        }
        Ok(())
    }
}

/// Threshold control configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Minimum number of ratings per genre.
    pub genre_min_ratings: ThresholdBounds,
    /// Minimum number of ratings per movie.
    pub movie_min_ratings: ThresholdBounds,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            genre_min_ratings: ThresholdBounds {
                min: 1,
                max: 1000,
                default: 100,
                step: 1,
            },
            movie_min_ratings: ThresholdBounds {
                min: 1,
                max: 10000,
                default: 50,
                step: 1,
            },
        }
    }
}

/// Report sizing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Entries kept in the genre frequency report.
    pub top_genres: usize,
    /// Entries kept in the genre rating report.
    pub top_rated_genres: usize,
    /// Entries kept in the top movies report.
    pub top_movies: usize,
    /// Fixed y-axis range for rating charts.
    pub rating_axis: [f64; 2],
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_genres: 20,
            top_rated_genres: 10,
            top_movies: 5,
            rating_axis: [0.0, 5.0],
        }
    }
}

/// Current values of the two threshold controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum number of ratings per genre.
    pub genre_min_ratings: u32,
    /// Minimum number of ratings per (title, year) pair.
    pub movie_min_ratings: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Config::default().default_thresholds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.thresholds.genre_min_ratings.default, 100);
        assert_eq!(config.thresholds.movie_min_ratings.max, 10000);
        assert_eq!(config.reports.top_genres, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp() {
        let bounds = ThresholdConfig::default().genre_min_ratings;
        assert_eq!(bounds.clamp(0), 1);
        assert_eq!(bounds.clamp(250), 250);
        assert_eq!(bounds.clamp(5000), 1000);
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.genre_min_ratings, 100);
        assert_eq!(thresholds.movie_min_ratings, 50);
    }

    #[test]
    fn test_partial_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data": {{"path": "ratings.csv"}}, "reports": {{"top_movies": 3}}}}"#)
            .unwrap();

        let config = Config::from_json_file(file.path()).unwrap();
        assert_eq!(config.data.path, "ratings.csv");
        assert_eq!(config.reports.top_movies, 3);
        assert_eq!(config.reports.top_genres, 20);
        assert_eq!(config.thresholds.movie_min_ratings.default, 50);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let mut config = Config::default();
        config.thresholds.movie_min_ratings.default = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.reports.rating_axis = [5.0, 0.0];
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
