//! Datasets
//!
//! This module implements the [`Table`] struct, the in-memory dataset every algorithm in this
//! workspace is trained on, together with the helpers to count classes and to partition a table
//! into shuffled, train/test or k-fold subsets.
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1};
use num_traits::{FromPrimitive, NumCast};

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;

mod impl_table;
mod partition;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used both for the records of a
/// table and for its targets, which hold discrete class codes.
pub trait Float:
    num_traits::Float
    + FromPrimitive
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + approx::AbsDiffEq<Epsilon = Self>
    + 'static
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Table
///
/// The fundamental structure of a dataset. It contains a matrix of records with dimensionality
/// (nsamples, nfeatures) and one target per record. The targets are floating point class codes.
///
/// # Invariants
///
/// * `records.nrows() == targets.len()`, checked on construction
/// * every record has the same number of features, guaranteed by the two-dimensional storage
///
/// A table is never mutated once built; every partitioning operation returns new tables.
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Table<F> {
    records: Array2<F>,
    targets: Array1<F>,
    feature_names: Vec<String>,
}

/// Counts the occurrences of every distinct class in `targets`
///
/// The result is ordered by ascending class value, NaN values are placed last. Keeping the
/// association ordered, instead of hashing floats, makes every consumer (impurity, majority
/// vote, node summaries) deterministic.
pub fn class_counts<F: Float>(targets: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Vec<(F, usize)> {
    let mut sorted = targets.to_vec();
    sorted.sort_by(total_order);

    let mut counts: Vec<(F, usize)> = Vec::new();
    for class in sorted {
        match counts.last_mut() {
            Some((last, count)) if total_order(last, &class) == Ordering::Equal => *count += 1,
            _ => counts.push((class, 1)),
        }
    }

    counts
}

/// Orders numbers ascending with every NaN after all other values
fn total_order<F: Float>(a: &F, b: &F) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Formats class counts as `class:count` pairs separated by spaces
pub fn format_class_counts<F: Float>(counts: &[(F, usize)]) -> String {
    counts
        .iter()
        .map(|(class, count)| format!("{}:{}", class, count))
        .collect::<Vec<_>>()
        .join(" ")
}
