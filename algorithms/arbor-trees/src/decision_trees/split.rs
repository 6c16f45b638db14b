//! Exhaustive search for the best binary split of a table
use arbor::error::{Error, Result};
use arbor::{Float, Table};
use ndarray::ArrayView1;
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A candidate partition of a table
///
/// Rows whose value of feature `feature_idx` is strictly smaller than `threshold` belong to
/// the left side, all other rows to the right side.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Split<F> {
    pub feature_idx: usize,
    pub threshold: F,
    pub weighted_impurity: F,
}

impl<F: Float> Split<F> {
    /// Whether a sample is routed to the left side of the split
    pub fn goes_left(&self, row: &ArrayView1<F>) -> bool {
        row[self.feature_idx] < self.threshold
    }

    /// Partition `table` into the (left, right) tables of this split
    pub fn partition(&self, table: &Table<F>) -> (Table<F>, Table<F>) {
        partition(table, self.feature_idx, self.threshold)
    }
}

/// Partition `table` with the rule `value < threshold → left`, else right
pub fn partition<F: Float>(
    table: &Table<F>,
    feature_idx: usize,
    threshold: F,
) -> (Table<F>, Table<F>) {
    let (left, right): (Vec<usize>, Vec<usize>) =
        (0..table.nsamples()).partition(|&i| table.records()[(i, feature_idx)] < threshold);

    (table.select(&left), table.select(&right))
}

/// Sample-weighted Gini impurity of the two sides of a partition
///
/// An empty side contributes nothing.
pub fn weighted_impurity<F: Float>(left: &[(F, usize)], right: &[(F, usize)]) -> F {
    let tallies = |counts: &[(F, usize)]| counts.iter().map(|(_, c)| *c).collect::<Vec<_>>();

    weighted_gini(&tallies(left), &tallies(right))
}

/// Weighted Gini impurity over per-class tallies of the two sides
fn weighted_gini<F: Float>(left: &[usize], right: &[usize]) -> F {
    let n_left = left.iter().sum::<usize>();
    let n_right = right.iter().sum::<usize>();
    let total = F::cast(n_left + n_right);

    let side = |tallies: &[usize], n: usize| {
        if n == 0 {
            return F::zero();
        }
        let n = F::cast(n);
        let purity = tallies
            .iter()
            .map(|c| F::cast(*c) / n)
            .map(|p| p * p)
            .sum::<F>();

        n / total * (F::one() - purity)
    };

    side(left, n_left) + side(right, n_right)
}

/// Find the split with the lowest weighted Gini impurity
///
/// Every observed value of every feature is tried as threshold. Candidates are visited by
/// feature index, then by row index, and the best one is only replaced by a strictly lower
/// impurity, so the earliest candidate wins ties.
///
/// The search does not compare against the impurity of the unsplit table: it returns a split
/// even if none improves on it. `Ok(None)` is returned for tables with fewer than two rows or
/// without features.
///
/// `discrete_targets` is only reported in the trace output.
///
/// ### Errors
///
/// [`Error::EmptyDataset`] if the table has no rows.
pub fn find_best_split<F: Float>(
    table: &Table<F>,
    discrete_targets: bool,
) -> Result<Option<Split<F>>> {
    if table.is_empty() {
        return Err(Error::EmptyDataset("split search"));
    }
    if table.nsamples() < 2 || table.nfeatures() == 0 {
        return Ok(None);
    }

    trace!(
        nsamples = table.nsamples(),
        nfeatures = table.nfeatures(),
        discrete_targets,
        "searching best split"
    );

    // every row is mapped once to the position of its class in the ordered class counts
    let counts = table.class_counts();
    let totals = counts.iter().map(|(_, c)| *c).collect::<Vec<_>>();
    let class_idx = table
        .targets()
        .iter()
        .map(|y| counts.iter().position(|(class, _)| class == y).unwrap_or(0))
        .collect::<Vec<_>>();

    #[cfg(not(feature = "parallel"))]
    let per_feature = (0..table.nfeatures())
        .map(|feature_idx| best_split_for_feature(table, feature_idx, &class_idx, &totals))
        .collect::<Vec<_>>();

    #[cfg(feature = "parallel")]
    let per_feature = (0..table.nfeatures())
        .into_par_iter()
        .map(|feature_idx| best_split_for_feature(table, feature_idx, &class_idx, &totals))
        .collect::<Vec<_>>();

    // merge in feature order, so that the result does not depend on the evaluation order
    Ok(per_feature.into_iter().flatten().fold(None, keep_better))
}

fn best_split_for_feature<F: Float>(
    table: &Table<F>,
    feature_idx: usize,
    class_idx: &[usize],
    totals: &[usize],
) -> Option<Split<F>> {
    let column = table.records().column(feature_idx);
    let mut left = vec![0; totals.len()];
    let mut right = vec![0; totals.len()];

    column
        .iter()
        .map(|&threshold| {
            left.iter_mut().for_each(|c| *c = 0);
            for (value, class) in column.iter().zip(class_idx) {
                if *value < threshold {
                    left[*class] += 1;
                }
            }
            for ((r, t), l) in right.iter_mut().zip(totals).zip(&left) {
                *r = t - l;
            }

            let weighted_impurity = weighted_gini(&left, &right);
            trace!(feature_idx, %threshold, %weighted_impurity, "candidate");

            Split {
                feature_idx,
                threshold,
                weighted_impurity,
            }
        })
        .fold(None, keep_better)
}

fn keep_better<F: Float>(best: Option<Split<F>>, candidate: Split<F>) -> Option<Split<F>> {
    match best {
        Some(best) if !(candidate.weighted_impurity < best.weighted_impurity) => Some(best),
        _ => Some(candidate),
    }
}
