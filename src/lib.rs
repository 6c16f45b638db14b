//! `arbor` provides the building blocks to learn binary decision trees from tabular numeric data.
//!
//! The root crate is the framework shared by the workspace: the [`Table`] dataset, the partitioning
//! helpers used to prepare training and validation data, the [`Fit`](traits::Fit) and
//! [`Predict`](traits::Predict) traits, checked hyperparameters and common metrics.
//!
//! The tree induction itself lives in `arbor-trees`, loading of delimited text files in
//! `arbor-datasets`, and a small command line front end in `arbor-cli`.
//!
//! ## Example
//!
//! ```rust
//! use arbor::prelude::*;
//! use ndarray::array;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let table = Table::new(array![[1., 2.], [3., 4.], [5., 6.], [7., 8.]], array![0., 0., 1., 1.])?;
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let (train, test) = table.shuffle(&mut rng).split_with_ratio(0.75)?;
//! assert_eq!((train.nsamples(), test.nsamples()), (3, 1));
//! # Ok::<(), arbor::Error>(())
//! ```

pub mod dataset;
pub mod error;
pub mod metrics;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Float, Table};
pub use error::Error;
pub use param_guard::ParamGuard;
