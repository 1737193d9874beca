//! Dashboard session.
//!
//! Loads and cleans the ratings once, then re-runs the reports whenever a
//! threshold control changes.

use crate::chart::Dashboard;
use ratings_core::{Config, Error, RatingRecord, Result, Thresholds};
use ratings_ingestion::{Cleaner, CleaningStats, RatingsLoader};
use ratings_reports::{ReportEngine, ReportSet};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// Interactive control input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set the minimum ratings per genre.
    GenreThreshold(u32),
    /// Set the minimum ratings per movie.
    MovieThreshold(u32),
    /// Render again with the current thresholds.
    Show,
    Help,
    Quit,
}

impl Command {
    pub const USAGE: &'static str =
        "commands: genre <n> | movie <n> | show | help | quit";
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or("").to_lowercase();
        let arg = parts.next();

        if parts.next().is_some() {
            return Err(Error::Other(format!("too many arguments: {line:?}")));
        }

        let number = |arg: Option<&str>| -> Result<u32> {
            let raw = arg.ok_or_else(|| Error::Other(format!("{verb} needs a number")))?;
            raw.parse()
                .map_err(|_| Error::Other(format!("{raw:?} is not a whole number")))
        };

        match verb.as_str() {
            "genre" => Ok(Command::GenreThreshold(number(arg)?)),
            "movie" => Ok(Command::MovieThreshold(number(arg)?)),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(Error::Other(format!("unknown command {other:?}"))),
        }
    }
}

/// Loaded records plus the current control values.
pub struct DashboardSession {
    config: Config,
    records: Vec<RatingRecord>,
    cleaning: CleaningStats,
    engine: ReportEngine,
    thresholds: Thresholds,
}

impl DashboardSession {
    /// Load and clean the CSV named by `config.data.path`.
    pub fn open(config: Config) -> Result<Self> {
        let raw = RatingsLoader::new().load_path(Path::new(&config.data.path))?;
        Self::from_raw_records(config, raw)
    }

    /// Build a session from raw (not yet cleaned) records.
    pub fn from_raw_records(config: Config, raw: Vec<RatingRecord>) -> Result<Self> {
        config.validate()?;

        let mut cleaner = Cleaner::new()?;
        let records = cleaner.clean(raw);
        let cleaning = cleaner.stats().clone();
        info!(
            kept = cleaning.output_records,
            dropped = cleaning.dropped(),
            "prepared ratings"
        );

        Ok(Self {
            engine: ReportEngine::new(&config.reports),
            thresholds: config.default_thresholds(),
            config,
            records,
            cleaning,
        })
    }

    /// Set the minimum ratings per genre, clamped to its bounds.
    ///
    /// Returns the value actually applied.
    pub fn set_genre_threshold(&mut self, value: u32) -> u32 {
        let bounds = self.config.thresholds.genre_min_ratings;
        let applied = bounds.clamp(value);
        if applied != value {
            warn!(requested = value, applied, "genre threshold clamped");
        }
        self.thresholds.genre_min_ratings = applied;
        applied
    }

    /// Set the minimum ratings per movie, clamped to its bounds.
    ///
    /// Returns the value actually applied.
    pub fn set_movie_threshold(&mut self, value: u32) -> u32 {
        let bounds = self.config.thresholds.movie_min_ratings;
        let applied = bounds.clamp(value);
        if applied != value {
            warn!(requested = value, applied, "movie threshold clamped");
        }
        self.thresholds.movie_min_ratings = applied;
        applied
    }

    /// Apply a threshold command. Returns `false` for commands that do not
    /// change the controls.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::GenreThreshold(n) => {
                self.set_genre_threshold(n);
                true
            }
            Command::MovieThreshold(n) => {
                self.set_movie_threshold(n);
                true
            }
            Command::Show | Command::Help | Command::Quit => false,
        }
    }

    /// Run every report with the current thresholds.
    pub fn reports(&self) -> ReportSet {
        self.engine.run(&self.records, self.thresholds)
    }

    /// Build the dashboard for the current thresholds.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_reports(&self.reports(), &self.config.reports)
    }

    /// Current threshold values.
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Cleaned records.
    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    /// Statistics from the cleaning pass.
    pub fn cleaning_stats(&self) -> &CleaningStats {
        &self.cleaning
    }
}
