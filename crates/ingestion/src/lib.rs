//! Data loading and cleaning for the movie-ratings report.
//!
//! This crate handles:
//! - CSV loading with required-column checks
//! - Title normalization (year extraction, trailing article removal)
//! - Filtering of `unknown` titles and genres

pub mod cleaner;
pub mod filter;
pub mod loader;
pub mod normalizer;

pub use cleaner::{Cleaner, CleaningStats};
pub use filter::{RecordFilter, Rejection};
pub use loader::RatingsLoader;
pub use normalizer::{NormalizedTitle, TitleNormalizer};
