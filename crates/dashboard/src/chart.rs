//! Chart and table specifications.
//!
//! A [`Dashboard`] describes what to draw, independent of how it is drawn.

use chrono::{DateTime, Utc};
use ratings_core::{config::ReportConfig, round2};
use ratings_reports::ReportSet;
use serde::{Deserialize, Serialize};

/// Page title.
pub const PAGE_TITLE: &str = "Movie Ratings Analysis";

/// A single data point: category or x label, and its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
}

/// Vertical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Fixed y-axis range; `None` scales to the data.
    pub y_range: Option<[f64; 2]>,
    pub points: Vec<Point>,
}

/// Line chart over an ordered x-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_range: Option<[f64; 2]>,
    pub points: Vec<Point>,
}

/// Table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Integer(v) => write!(f, "{v}"),
            Cell::Number(v) => write!(f, "{v:.2}"),
            Cell::Text(v) => f.write_str(v),
        }
    }
}

/// Data table with a caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub caption: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// One drawable element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Bar(BarChart),
    Line(LineChart),
    Table(Table),
}

/// A subheader followed by its panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub subheader: String,
    pub panels: Vec<Panel>,
}

/// Full dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub record_count: usize,
    pub sections: Vec<Section>,
}

impl Dashboard {
    /// Build the dashboard for one report run.
    pub fn from_reports(reports: &ReportSet, config: &ReportConfig) -> Self {
        let axis = Some(config.rating_axis);
        let genre_min = reports.thresholds.genre_min_ratings;
        let movie_min = reports.thresholds.movie_min_ratings;

        let genre_distribution = BarChart {
            title: format!("Top {} Genres by Number of Ratings", config.top_genres),
            x_label: "Genre".to_string(),
            y_label: "Number of Ratings".to_string(),
            y_range: None,
            points: reports
                .genre_counts
                .iter()
                .map(|g| Point {
                    label: g.genres.clone(),
                    value: g.count as f64,
                })
                .collect(),
        };

        let genre_ratings = BarChart {
            title: format!(
                "Top {} Genres by Average Rating (Min. {genre_min} ratings)",
                config.top_rated_genres
            ),
            x_label: "Genre".to_string(),
            y_label: "Average Rating".to_string(),
            y_range: axis,
            points: reports
                .genre_ratings
                .iter()
                .map(|g| Point {
                    label: g.genres.clone(),
                    value: g.mean,
                })
                .collect(),
        };

        let yearly = LineChart {
            title: "Average Movie Rating by Year".to_string(),
            x_label: "Year".to_string(),
            y_label: "Average Rating".to_string(),
            y_range: axis,
            points: reports
                .yearly
                .iter()
                .map(|y| Point {
                    label: y.year.to_string(),
                    value: y.mean,
                })
                .collect(),
        };

        let top_movies = BarChart {
            title: format!(
                "Top {} Movies by Average Rating (Min. {movie_min} ratings)",
                config.top_movies
            ),
            x_label: "Movie Title".to_string(),
            y_label: "Average Rating".to_string(),
            y_range: axis,
            points: reports
                .top_movies
                .iter()
                .map(|m| Point {
                    label: m.label(),
                    value: m.mean,
                })
                .collect(),
        };

        let details = Table {
            caption: "Movie Details:".to_string(),
            columns: ["Title", "Year", "Average Rating", "Number of Ratings"]
                .map(String::from)
                .to_vec(),
            rows: reports
                .top_movies
                .iter()
                .map(|m| {
                    vec![
                        Cell::Text(m.title.clone()),
                        Cell::Integer(i64::from(m.year)),
                        Cell::Number(round2(m.mean)),
                        Cell::Integer(m.count as i64),
                    ]
                })
                .collect(),
        };

        Self {
            title: PAGE_TITLE.to_string(),
            generated_at: Utc::now(),
            record_count: reports.record_count,
            sections: vec![
                Section {
                    subheader: "Genre Distribution".to_string(),
                    panels: vec![Panel::Bar(genre_distribution)],
                },
                Section {
                    subheader: "Highest Rated Genres".to_string(),
                    panels: vec![Panel::Bar(genre_ratings)],
                },
                Section {
                    subheader: "Average Rating Trends Over Time".to_string(),
                    panels: vec![Panel::Line(yearly)],
                },
                Section {
                    subheader: format!("Top {} Best Rated Movies", config.top_movies),
                    panels: vec![Panel::Bar(top_movies), Panel::Table(details)],
                },
            ],
        }
    }
}
