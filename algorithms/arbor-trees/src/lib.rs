//!
//! # Decision tree learning
//! `arbor-trees` provides a pure Rust implementation of greedy binary decision tree induction
//! for classification of tabular numeric data.
//!
//! # The big picture
//!
//! `arbor-trees` is the algorithm crate of the `arbor` workspace. Tables, partitioning and metrics
//! come from the `arbor` core crate, loading of delimited text files from `arbor-datasets`.
//!
//! Decision trees predict the class of a sample by walking a sequence of threshold tests on its
//! features, learned top-down from the training data by an exhaustive search over every observed
//! feature value.
//!
//! # Current state
//!
//! `arbor-trees` provides an [implementation](DecisionTree) of single-tree fitting with Gini
//! impurity, accuracy scoring and export of the fitted tree to Graphviz DOT.
//!

mod decision_trees;

pub use decision_trees::*;

// Re-export the common Result alias for convenience
pub use arbor::error::Result;
