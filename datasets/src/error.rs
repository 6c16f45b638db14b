//! Loader error types
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from reading a table out of a CSV source
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist or is unreadable
    #[error("cannot open {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Malformed CSV framing, including rows with a different number of fields
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    /// A cell which is not a finite number
    #[error("line {line}, column {column}: \"{value}\" is not a finite number")]
    MalformedInput {
        line: u64,
        column: usize,
        value: String,
    },
    /// Records need at least one feature column and the label column
    #[error("line {line}: expected at least two columns, found {columns}")]
    TooFewColumns { line: u64, columns: usize },
    #[error("the input contains no data rows")]
    EmptyDataset,
    #[error(transparent)]
    Table(#[from] arbor::Error),
}
