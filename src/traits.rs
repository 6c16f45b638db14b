//! Provide traits for different classes of algorithms
//!

use crate::dataset::{Float, Table};
use ndarray::{Array1, ArrayBase, Data, Ix2};

/// Fittable algorithms
///
/// A fittable algorithm takes a table and creates a concept of some kind about it. For example
/// a decision tree learns its splits from the records and targets of the table.
pub trait Fit<F: Float, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, table: &Table<F>) -> Result<Self::Object, E>;
}

/// Predict with model
///
/// A fitted model produces one target for every record of its input. Implementations validate
/// the shape of the input and return an error instead of truncating or padding it.
pub trait Predict<F: Float> {
    fn predict<D: Data<Elem = F>>(
        &self,
        records: &ArrayBase<D, Ix2>,
    ) -> crate::error::Result<Array1<F>>;
}
