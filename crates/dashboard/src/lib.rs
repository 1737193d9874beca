//! Presentation layer for the movie-ratings report.
//!
//! This crate provides:
//! - Chart and table specifications built from report output
//! - Text and JSON renderers
//! - A session that re-runs the reports when a threshold changes

pub mod chart;
pub mod logging;
pub mod render;
pub mod session;

pub use chart::{BarChart, Cell, Dashboard, LineChart, Panel, Point, Section, Table};
pub use render::{JsonRenderer, Renderer, TextRenderer};
pub use session::{Command, DashboardSession};
