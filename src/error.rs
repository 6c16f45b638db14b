//! Error types in Arbor
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("invalid table: {0}")]
    InvalidTable(#[from] TableError),
    #[error("empty dataset: {0} requires at least one sample")]
    EmptyDataset(&'static str),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}

/// The table invariant that was violated, with the offending dimensions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("{rows} rows but {labels} labels")]
    LengthMismatch { rows: usize, labels: usize },
    #[error("expected {expected} features per row, got {got}")]
    FeatureMismatch { expected: usize, got: usize },
    #[error("target {index} is not a finite number")]
    NonFiniteTarget { index: usize },
}
