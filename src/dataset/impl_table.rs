use ndarray::{Array1, Array2, ArrayView1, Axis};

use super::{class_counts, Float, Table};
use crate::error::{Result, TableError};

impl<F: Float> Table<F> {
    /// Create a new table from a record matrix and one target per record
    ///
    /// Fails with [`TableError::LengthMismatch`] if the number of rows and targets differ, and
    /// with [`TableError::NonFiniteTarget`] if a target is NaN or infinite.
    pub fn new(records: Array2<F>, targets: Array1<F>) -> Result<Self> {
        if records.nrows() != targets.len() {
            return Err(TableError::LengthMismatch {
                rows: records.nrows(),
                labels: targets.len(),
            }
            .into());
        }
        if let Some(index) = targets.iter().position(|y| !y.is_finite()) {
            return Err(TableError::NonFiniteTarget { index }.into());
        }

        let feature_names = default_feature_names(records.ncols());

        Ok(Table {
            records,
            targets,
            feature_names,
        })
    }

    /// Create a new table from row-oriented feature vectors
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: Vec<Vec<F>>, targets: Vec<F>) -> Result<Self> {
        let nfeatures = rows.first().map(|row| row.len()).unwrap_or(0);
        if let Some(row) = rows.iter().find(|row| row.len() != nfeatures) {
            return Err(TableError::FeatureMismatch {
                expected: nfeatures,
                got: row.len(),
            }
            .into());
        }

        let nrows = rows.len();
        let flat = rows.into_iter().flatten().collect::<Vec<_>>();
        let records = Array2::from_shape_vec((nrows, nfeatures), flat)?;

        Table::new(records, Array1::from(targets))
    }

    /// Attach descriptive feature names
    ///
    /// Names are ignored if their number does not match the number of features.
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> Self {
        if names.len() == self.nfeatures() {
            self.feature_names = names.into_iter().map(|x| x.into()).collect();
        }

        self
    }

    pub fn records(&self) -> &Array2<F> {
        &self.records
    }

    pub fn targets(&self) -> &Array1<F> {
        &self.targets
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.nsamples() == 0
    }

    /// Returns the record at `idx`
    ///
    /// ### Panics
    ///
    /// If `idx` is out of bounds
    pub fn row(&self, idx: usize) -> ArrayView1<F> {
        self.records.row(idx)
    }

    /// Creates a new table holding the rows at `indices`, in that order
    pub fn select(&self, indices: &[usize]) -> Table<F> {
        Table {
            records: self.records.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
            feature_names: self.feature_names.clone(),
        }
    }

    /// Ordered `(class, count)` association of the targets
    pub fn class_counts(&self) -> Vec<(F, usize)> {
        class_counts(&self.targets)
    }

    /// Whether every target equals its own integer part
    pub fn has_discrete_targets(&self) -> bool {
        self.targets.iter().all(|x| *x == x.trunc())
    }
}

fn default_feature_names(nfeatures: usize) -> Vec<String> {
    (0..nfeatures).map(|idx| format!("feature-{}", idx)).collect()
}
