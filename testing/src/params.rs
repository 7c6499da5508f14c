//! Parameter sources for table-driven tests.
//!
//! Inline values and inline rows are written with `rstest`'s `#[case]` and
//! `#[values]`. This module covers the sources that live elsewhere: CSV
//! files and plain functions returning a list.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load a parameter file
#[derive(Error, Debug)]
pub enum ParamsError {
    /// The file is missing, unreadable, or a row does not deserialize
    #[error("Cannot read parameters from {path}: {source}")]
    Csv {
        /// File being read
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },
}

/// Deserialize every row of a CSV file with a header line.
///
/// Surrounding whitespace in fields is trimmed.
///
/// # Errors
///
/// Returns [`ParamsError::Csv`] if the file cannot be opened or a row does
/// not match `T`.
pub fn csv_rows<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, ParamsError> {
    let path = path.as_ref();
    let wrap = |source| ParamsError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(wrap)?;

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(wrap)?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Loaded CSV parameters");
    Ok(rows)
}

/// Debit amounts every account test can take from the default balance
#[must_use]
pub fn amount_list() -> Vec<&'static str> {
    vec!["100", "200", "300", "500", "700", "1000"]
}
