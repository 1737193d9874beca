//! Core types and configuration for the movie-ratings report.
//!
//! This crate provides shared types used across all other crates:
//! - The rating record and report row types
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, ThresholdBounds, Thresholds};
pub use error::{Error, Result};
pub use types::*;
