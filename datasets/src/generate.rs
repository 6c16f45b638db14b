//! Utility functions for randomly generating tables

use arbor::error::Result;
use arbor::Table;
use ndarray::{s, Array, Array1, Array2, ArrayBase, Data, Ix2};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, StandardNormal},
    RandomExt,
};

/// Special case of `blobs_with_distribution` with a standard normal distribution.
pub fn blobs(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    rng: &mut impl Rng,
) -> Result<Table<f64>> {
    blobs_with_distribution(blob_size, blob_centroids, StandardNormal, rng)
}

/// Given an input matrix `blob_centroids`, with shape `(n_blobs, n_features)`,
/// generate `blob_size` samples around each of the blob centroids.
///
/// The samples of the `i`-th blob are drawn from `distribution` shifted to the `i`-th centroid
/// and labelled with class `i`, so well separated centroids give a best-case input for a
/// classifier.
pub fn blobs_with_distribution(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    distribution: impl Distribution<f64> + Clone,
    rng: &mut impl Rng,
) -> Result<Table<f64>> {
    let (n_centroids, n_features) = blob_centroids.dim();
    let mut records = Array2::zeros((n_centroids * blob_size, n_features));
    let mut targets = Array1::zeros(n_centroids * blob_size);

    for (idx, centroid) in blob_centroids.rows().into_iter().enumerate() {
        let noise: Array2<f64> =
            Array::random_using((blob_size, n_features), distribution.clone(), rng);

        let (start, end) = (idx * blob_size, (idx + 1) * blob_size);
        records
            .slice_mut(s![start..end, ..])
            .assign(&(noise + &centroid));
        targets.slice_mut(s![start..end]).fill(idx as f64);
    }

    Table::new(records, targets)
}
