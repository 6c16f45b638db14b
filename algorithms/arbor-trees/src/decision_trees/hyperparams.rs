use arbor::{
    error::{Error, Result},
    Float, ParamGuard,
};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::DecisionTree;

/// The set of hyperparameters that can be specified for fitting a
/// [decision tree](struct.DecisionTree.html).
///
/// ### Example
///
/// ```rust
/// use arbor_trees::DecisionTree;
/// use arbor::prelude::*;
/// use ndarray::array;
///
/// // Initialize the default set of parameters
/// let params = DecisionTree::params();
/// // Set the parameters to the desired values
/// let params = params.max_depth(3).seed(Some(42));
///
/// let table = Table::new(
///     array![[1., 0.], [2., 0.], [8., 1.], [9., 1.]],
///     array![0., 0., 1., 1.],
/// )?;
/// // Fit the decision tree on the training data
/// let tree = params.fit(&table)?;
/// // Check accuracy on the training data
/// assert_eq!(tree.score(table.records(), table.targets())?, 1.0);
/// # Ok::<(), arbor::Error>(())
/// ```
///
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecisionTreeValidParams<F> {
    max_depth: usize,
    min_impurity_decrease: F,
    seed: Option<u64>,
}

impl<F: Float> DecisionTreeValidParams<F> {
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn min_impurity_decrease(&self) -> F {
        self.min_impurity_decrease
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecisionTreeParams<F>(DecisionTreeValidParams<F>);

impl<F: Float> DecisionTreeParams<F> {
    pub fn new() -> Self {
        Self(DecisionTreeValidParams {
            max_depth: 5,
            min_impurity_decrease: F::zero(),
            seed: None,
        })
    }

    /// Sets the limit to the depth of the decision tree
    ///
    /// The root has depth zero, so a limit of zero produces a single leaf.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.0.max_depth = max_depth;
        self
    }

    /// Sets the decrease in impurity a split has to exceed in order to be applied
    ///
    /// With the default of zero any strict improvement over the impurity of the parent is enough.
    pub fn min_impurity_decrease(mut self, min_impurity_decrease: F) -> Self {
        self.0.min_impurity_decrease = min_impurity_decrease;
        self
    }

    /// Sets the seed recorded on the fitted model
    ///
    /// Induction itself is deterministic; the seed documents how the training data was shuffled.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.0.seed = seed;
        self
    }
}

impl<F: Float> Default for DecisionTreeParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> DecisionTree<F> {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `max_depth = 5`
    /// * `min_impurity_decrease = 0.0`
    /// * `seed = None`
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> DecisionTreeParams<F> {
        DecisionTreeParams::new()
    }
}

impl<F: Float> ParamGuard for DecisionTreeParams<F> {
    type Checked = DecisionTreeValidParams<F>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        let decrease = self.0.min_impurity_decrease;
        if !decrease.is_finite() || decrease < F::zero() {
            Err(Error::Parameters(format!(
                "Minimum impurity decrease should be a finite, non-negative number, but was {}",
                decrease
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
