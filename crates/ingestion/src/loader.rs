//! CSV loading.
//!
//! Reads the ratings file into raw [`RatingRecord`]s. Titles are left exactly
//! as they appear in the file; normalization happens in the cleaning stage.
//! Empty cells and the usual NA markers load as missing values.

use csv::{ReaderBuilder, StringRecord};
use ratings_core::{Error, RatingRecord, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Cell values read as missing, matching the common CSV NA markers.
const NA_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a cell holds a missing-value marker.
#[inline]
fn is_na(cell: &str) -> bool {
    NA_MARKERS.contains(&cell)
}

/// Column positions of the required fields.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    title: usize,
    genres: usize,
    rating: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::missing_column(name))
        };

        Ok(Self {
            title: find("title")?,
            genres: find("genres")?,
            rating: find("rating")?,
        })
    }
}

/// Loader for the ratings CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingsLoader;

impl RatingsLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Load records from a file path.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Vec<RatingRecord>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let records = self.load_reader(file)?;
        info!(path = %path.display(), records = records.len(), "loaded ratings");
        Ok(records)
    }

    /// Load records from any reader.
    ///
    /// Fails on a missing `title`, `genres` or `rating` column, on ragged
    /// rows, and on ratings that do not parse as numbers. A missing rating
    /// loads as NaN and is skipped by the aggregates.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<RatingRecord>> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let columns = ColumnIndex::from_headers(rdr.headers()?)?;
        debug!(?columns, "resolved ratings columns");

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            records.push(Self::parse_row(&row, columns)?);
        }

        Ok(records)
    }

    fn parse_row(row: &StringRecord, columns: ColumnIndex) -> Result<RatingRecord> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let field = |idx: usize| row.get(idx).unwrap_or("");
        let text = |idx: usize| Some(field(idx)).filter(|v| !is_na(v)).map(str::to_string);

        let raw_rating = field(columns.rating).trim();
        let rating = if is_na(raw_rating) {
            f64::NAN
        } else {
            raw_rating.parse().map_err(|_| {
                Error::data(format!("line {line}: rating {raw_rating:?} is not a number"))
            })?
        };

        Ok(RatingRecord {
            title: text(columns.title),
            year: None,
            genres: text(columns.genres),
            rating,
        })
    }
}
