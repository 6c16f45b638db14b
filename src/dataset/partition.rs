//! Shuffling, train/test splitting and k-fold partitioning of tables
//!
//! All randomness comes from an explicitly passed generator, so that a seeded generator always
//! reproduces the same partition independently of anything else happening in the program.
use ndarray::{concatenate, Axis};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::{Float, Table};
use crate::error::{Error, Result};

impl<F: Float> Table<F> {
    /// Returns a copy of the table with its rows randomly permuted
    pub fn shuffle<R: Rng>(&self, rng: &mut R) -> Table<F> {
        let mut indices = (0..self.nsamples()).collect::<Vec<_>>();
        indices.shuffle(rng);

        self.select(&indices)
    }

    /// Split the table into two parts
    ///
    /// The first `floor(ratio * nsamples)` rows are placed in the first table, the remaining rows
    /// in the second one. Rows are not shuffled, call [`Table::shuffle`] first for a random split.
    pub fn split_with_ratio(&self, ratio: f64) -> Result<(Table<F>, Table<F>)> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::Parameters(format!(
                "split ratio should be in [0, 1], but was {}",
                ratio
            )));
        }

        let n = (self.nsamples() as f64 * ratio).floor() as usize;
        debug!(ratio, first = n, second = self.nsamples() - n, "splitting table");
        let first = (0..n).collect::<Vec<_>>();
        let second = (n..self.nsamples()).collect::<Vec<_>>();

        Ok((self.select(&first), self.select(&second)))
    }

    /// Distribute the rows into `k` folds
    ///
    /// The rows are randomly permuted and the row at permuted position `i` is assigned to fold
    /// `i mod k`, so fold sizes differ by at most one.
    pub fn k_folds<R: Rng>(&self, k: usize, rng: &mut R) -> Result<Vec<Table<F>>> {
        if k == 0 || k > self.nsamples() {
            return Err(Error::Parameters(format!(
                "number of folds should be in [1, {}], but was {}",
                self.nsamples(),
                k
            )));
        }

        let mut permutation = (0..self.nsamples()).collect::<Vec<_>>();
        permutation.shuffle(rng);

        let mut buckets = vec![Vec::new(); k];
        for (i, idx) in permutation.into_iter().enumerate() {
            buckets[i % k].push(idx);
        }
        debug!(k, nsamples = self.nsamples(), "assigned rows to folds");

        Ok(buckets.iter().map(|idx| self.select(idx)).collect())
    }

    /// Produce `k` (training, validation) pairs for cross validation
    ///
    /// The validation set of pair `i` is fold `i` of [`Table::k_folds`], the training set is the
    /// union of all remaining folds, in fold order.
    pub fn cross_validation_pairs<R: Rng>(
        &self,
        k: usize,
        rng: &mut R,
    ) -> Result<Vec<(Table<F>, Table<F>)>> {
        if k < 2 {
            return Err(Error::Parameters(format!(
                "cross validation needs at least two folds, but got {}",
                k
            )));
        }

        let folds = self.k_folds(k, rng)?;

        (0..k)
            .map(|i| {
                let rest = folds
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, fold)| fold)
                    .collect::<Vec<_>>();

                Ok((self.concatenate(&rest)?, folds[i].clone()))
            })
            .collect()
    }

    /// Stacks the rows of `tables`, which share the feature layout of `self`
    fn concatenate(&self, tables: &[&Table<F>]) -> Result<Table<F>> {
        let records = tables.iter().map(|t| t.records.view()).collect::<Vec<_>>();
        let targets = tables.iter().map(|t| t.targets.view()).collect::<Vec<_>>();

        Ok(Table {
            records: concatenate(Axis(0), &records)?,
            targets: concatenate(Axis(0), &targets)?,
            feature_names: self.feature_names.clone(),
        })
    }
}
