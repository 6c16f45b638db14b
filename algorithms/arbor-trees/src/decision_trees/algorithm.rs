//! Binary decision trees
//!
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};
use std::fmt;
use tracing::{debug, info, instrument};

use super::impurity::{entropy_from_counts, gini_from_counts, majority_from_counts};
use super::split::find_best_split;
use super::{DecisionTreeValidParams, Dot, NodeIter};
use arbor::{
    dataset::format_class_counts,
    error::{Error, Result, TableError},
    metrics::accuracy,
    traits::*,
    Float, Table,
};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// What a node does with a sample: predict, or route it to one of its two children
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<F> {
    Leaf {
        prediction: F,
    },
    /// Samples with `value[feature_idx] < threshold` go left, all others right
    Internal {
        feature_idx: usize,
        threshold: F,
        left: Box<TreeNode<F>>,
        right: Box<TreeNode<F>>,
    },
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
/// A node in the decision tree
pub struct TreeNode<F> {
    kind: NodeKind<F>,
    depth: usize,
    samples: usize,
    impurity: F,
    entropy: F,
    class_counts: Vec<(F, usize)>,
}

impl<F: Float> TreeNode<F> {
    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn kind(&self) -> &NodeKind<F> {
        &self.kind
    }

    /// Returns the depth of the node in the decision tree
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of training samples which reached this node
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Gini impurity of the training samples which reached this node
    pub fn impurity(&self) -> F {
        self.impurity
    }

    /// Entropy of the training samples which reached this node
    pub fn entropy(&self) -> F {
        self.entropy
    }

    /// Ordered `(class, count)` summary of the training samples which reached this node
    pub fn class_counts(&self) -> &[(F, usize)] {
        &self.class_counts
    }

    /// Returns `Some(prediction)` for leaf nodes and `None` for internal nodes.
    pub fn prediction(&self) -> Option<F> {
        match self.kind {
            NodeKind::Leaf { prediction } => Some(prediction),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Returns the split (feature index, threshold) of internal nodes
    pub fn split(&self) -> Option<(usize, F)> {
        match self.kind {
            NodeKind::Internal {
                feature_idx,
                threshold,
                ..
            } => Some((feature_idx, threshold)),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Returns both children, first left then right
    pub fn children(&self) -> Option<(&TreeNode<F>, &TreeNode<F>)> {
        match &self.kind {
            NodeKind::Internal { left, right, .. } => Some((left.as_ref(), right.as_ref())),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Recursively fits the node
    ///
    /// A node becomes a leaf predicting the majority class when the maximal depth is reached,
    /// when its samples are pure, or when the best split does not decrease the impurity by more
    /// than `min_impurity_decrease`. Otherwise the table is partitioned and both children are
    /// fitted on their share of the rows.
    fn fit(
        table: &Table<F>,
        depth: usize,
        hyperparameters: &DecisionTreeValidParams<F>,
        discrete_targets: bool,
    ) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyDataset("tree induction"));
        }

        let class_counts = table.class_counts();
        let impurity = gini_from_counts(&class_counts);
        let entropy = entropy_from_counts(&class_counts);

        let leaf = |class_counts: Vec<(F, usize)>| {
            let prediction = majority_from_counts(&class_counts);
            debug!(
                depth,
                samples = table.nsamples(),
                %impurity,
                %prediction,
                "leaf"
            );

            TreeNode {
                kind: NodeKind::Leaf { prediction },
                depth,
                samples: table.nsamples(),
                impurity,
                entropy,
                class_counts,
            }
        };

        if depth >= hyperparameters.max_depth() || impurity == F::zero() {
            return Ok(leaf(class_counts));
        }

        let split = match find_best_split(table, discrete_targets)? {
            Some(split) => split,
            None => return Ok(leaf(class_counts)),
        };

        // the search does not check for an improvement, a split which leaves one side empty
        // has the impurity of its parent and is rejected here as well
        if impurity - split.weighted_impurity <= hyperparameters.min_impurity_decrease() {
            return Ok(leaf(class_counts));
        }

        let (left, right) = split.partition(table);
        if left.is_empty() || right.is_empty() {
            return Ok(leaf(class_counts));
        }

        debug!(
            depth,
            samples = table.nsamples(),
            feature_idx = split.feature_idx,
            threshold = %split.threshold,
            %impurity,
            weighted_impurity = %split.weighted_impurity,
            "split"
        );

        let left = TreeNode::fit(&left, depth + 1, hyperparameters, discrete_targets)?;
        let right = TreeNode::fit(&right, depth + 1, hyperparameters, discrete_targets)?;

        Ok(TreeNode {
            kind: NodeKind::Internal {
                feature_idx: split.feature_idx,
                threshold: split.threshold,
                left: Box::new(left),
                right: Box::new(right),
            },
            depth,
            samples: table.nsamples(),
            impurity,
            entropy,
            class_counts,
        })
    }
}

/// A fitted decision tree model for classification.
///
/// ### Structure
/// A decision tree structure is a binary tree where:
/// * Each internal node specifies a decision, represented by a choice of a feature and a "threshold" such that all observations for which
/// `feature < threshold` is true fall in the left subtree, while the others fall in the right subtree.
///
/// * leaf nodes make predictions, and their prediction is the most popular label in the node
///
/// ### Algorithm
///
/// Starting with a single root node, decision trees are trained recursively by applying the following rule to every
/// node considered:
///
/// * Stop with a leaf if the maximal depth is reached or all observations share one class;
/// * Try every observed value of every feature as threshold and keep the candidate with the lowest sample-weighted Gini impurity
///   of the two resulting subsets, preferring the earliest candidate on ties;
/// * If that candidate decreases the impurity of the node, generate two child nodes, the left one containing all observations
///   with `feature < threshold` and the right one containing the rest;
/// * Otherwise mark the node as leaf predicting the most common label, the smallest one on ties.
///
/// ### Predictions
///
/// To predict the label of a sample, the tree is traversed from the root to a leaf, choosing between left and right children
/// with the same `feature < threshold` rule used during training. The final prediction for the sample is the prediction of the
/// reached leaf.
///
/// ### Example
///
/// Here is an example on how to train a decision tree from its parameters:
///
/// ```rust
///
/// use arbor_trees::DecisionTree;
/// use arbor::prelude::*;
/// use ndarray::array;
///
/// let table = Table::new(
///     array![[1., 7.], [2., 3.], [3., 8.], [6., 1.], [7., 9.], [8., 2.]],
///     array![0., 0., 0., 1., 1., 1.],
/// )?;
/// // Fit the tree
/// let tree = DecisionTree::params().max_depth(2).fit(&table)?;
/// // Get accuracy on training set
/// let accuracy = tree.score(table.records(), table.targets())?;
///
/// assert_eq!(accuracy, 1.0);
/// # Ok::<(), arbor::Error>(())
/// ```
///
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree<F> {
    root_node: TreeNode<F>,
    num_features: usize,
    feature_names: Vec<String>,
    hyperparameters: DecisionTreeValidParams<F>,
    discrete_targets: bool,
}

impl<F: Float> Predict<F> for DecisionTree<F> {
    /// Make predictions for each row of a matrix of features `x`.
    fn predict<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix2>) -> Result<Array1<F>> {
        if x.ncols() != self.num_features {
            return Err(TableError::FeatureMismatch {
                expected: self.num_features,
                got: x.ncols(),
            }
            .into());
        }

        Ok(x.rows()
            .into_iter()
            .map(|row| make_prediction(&row, &self.root_node))
            .collect())
    }
}

impl<F: Float> Fit<F, Error> for DecisionTreeValidParams<F> {
    type Object = DecisionTree<F>;

    /// Fit a decision tree using `hyperparameters` on the table.
    #[instrument(skip_all, fields(nsamples = table.nsamples(), nfeatures = table.nfeatures()))]
    fn fit(&self, table: &Table<F>) -> Result<Self::Object> {
        if table.is_empty() {
            return Err(Error::EmptyDataset("decision tree fitting"));
        }

        // only reported, the induction treats every target as a class code
        let discrete_targets = table.has_discrete_targets();
        info!(
            discrete_targets,
            class_counts = %format_class_counts(&table.class_counts()),
            max_depth = self.max_depth(),
            "fitting decision tree"
        );

        let root_node = TreeNode::fit(table, 0, self, discrete_targets)?;

        let tree = DecisionTree {
            root_node,
            num_features: table.nfeatures(),
            feature_names: table.feature_names().to_vec(),
            hyperparameters: *self,
            discrete_targets,
        };
        debug!(
            nodes = tree.num_nodes(),
            leaves = tree.num_leaves(),
            depth = tree.depth(),
            "decision tree built"
        );

        Ok(tree)
    }
}

impl<F: Float> DecisionTree<F> {
    /// Create a node iterator in level-order (BFT)
    pub fn iter_nodes(&self) -> NodeIter<F> {
        NodeIter::new(&self.root_node)
    }

    /// Return root node of the tree
    pub fn root_node(&self) -> &TreeNode<F> {
        &self.root_node
    }

    /// Accuracy of the predictions for `x` against `y`
    ///
    /// A prediction is only counted as correct if it is exactly equal to its target, which is
    /// sound because targets are class codes.
    pub fn score<D, T>(&self, x: &ArrayBase<D, Ix2>, y: &ArrayBase<T, Ix1>) -> Result<F>
    where
        D: Data<Elem = F>,
        T: Data<Elem = F>,
    {
        if x.nrows() != y.len() {
            return Err(TableError::LengthMismatch {
                rows: x.nrows(),
                labels: y.len(),
            }
            .into());
        }
        if y.is_empty() {
            return Err(Error::EmptyDataset("score"));
        }

        let prediction = self.predict(x)?;
        accuracy(&prediction, y)
    }

    /// Return the depth of the deepest node
    pub fn depth(&self) -> usize {
        self.iter_nodes()
            .fold(0, |max, node| usize::max(max, node.depth))
    }

    /// Return the depth limit the tree was fitted with
    pub fn max_depth(&self) -> usize {
        self.hyperparameters.max_depth()
    }

    /// Return the seed recorded with the hyperparameters
    pub fn seed(&self) -> Option<u64> {
        self.hyperparameters.seed()
    }

    /// Return the number of leaves in this tree
    pub fn num_leaves(&self) -> usize {
        self.iter_nodes().filter(|node| node.is_leaf()).count()
    }

    /// Return the number of nodes in this tree
    pub fn num_nodes(&self) -> usize {
        self.iter_nodes().count()
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Whether all training targets were integral
    pub fn discrete_targets(&self) -> bool {
        self.discrete_targets
    }

    /// Generates a [`Dot`](struct.Dot.html) structure to print the
    /// fitted tree as Graphviz digraph, with the following default parameters:
    ///
    /// * `max_classes=10`
    /// * `feature_names=false`
    ///
    pub fn export_to_dot(&self) -> Dot<F> {
        Dot::new(self)
    }

    /// Graphviz DOT description of the tree with default settings
    pub fn to_graph_description(&self) -> String {
        self.export_to_dot().to_string()
    }
}

/// Indented text dump of the tree, one line per node in pre-order, left child first
impl<F: Float> fmt::Display for DecisionTree<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut stack = vec![&self.root_node];
        while let Some(node) = stack.pop() {
            write!(f, "{:indent$}", "", indent = 2 * node.depth)?;
            match node.split() {
                Some((feature_idx, threshold)) => {
                    write!(f, "feature {} < {:.2}", feature_idx, threshold)?
                }
                None => write!(f, "predict {}", node.prediction().unwrap_or_else(F::nan))?,
            }
            writeln!(
                f,
                " (samples {}, impurity {:.3}, classes {})",
                node.samples,
                node.impurity,
                format_class_counts(&node.class_counts)
            )?;

            if let Some((left, right)) = node.children() {
                stack.push(right);
                stack.push(left);
            }
        }

        Ok(())
    }
}

/// Classify a sample by descending from `node` to a leaf.
fn make_prediction<F: Float>(x: &ArrayView1<F>, mut node: &TreeNode<F>) -> F {
    loop {
        match &node.kind {
            NodeKind::Leaf { prediction } => return *prediction,
            NodeKind::Internal {
                feature_idx,
                threshold,
                left,
                right,
            } => {
                node = if x[*feature_idx] < *threshold {
                    left.as_ref()
                } else {
                    right.as_ref()
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use arbor::ParamGuard;
    use ndarray::{array, s, Array1, Array2};
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn uniform(shape: (usize, usize), low: f64, high: f64, rng: &mut SmallRng) -> Array2<f64> {
        Array2::from_shape_simple_fn(shape, || rng.gen_range(low..high))
    }

    #[test]
    /// Single feature test
    ///
    /// Generate a dataset where a single feature perfectly correlates
    /// with the target while the remaining features are random uniform
    /// noise and do not add any information.
    fn single_feature_random_noise_binary() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(42);

        // generate data with 9 white noise and a single correlated feature
        let mut data = uniform((50, 10), -4., 4., &mut rng);
        data.slice_mut(s![.., 8]).assign(
            &(0..50)
                .map(|x| if x < 25 { 0.0 } else { 1.0 })
                .collect::<Array1<_>>(),
        );

        let targets = (0..50)
            .map(|x| if x < 25 { 1.0 } else { 0.0 })
            .collect::<Array1<_>>();
        let table = Table::new(data, targets)?;

        let model = DecisionTree::params().max_depth(2).fit(&table)?;

        // we should only use feature index 8 here
        assert_eq!(model.root_node().split(), Some((8, 1.0)));
        assert_eq!(model.num_leaves(), 2);

        // check for perfect accuracy
        let accuracy = model.score(table.records(), table.targets())?;
        assert_abs_diff_eq!(accuracy, 1.0, epsilon = 1e-15);

        Ok(())
    }

    #[test]
    fn max_depth_zero_produces_single_leaf() -> Result<()> {
        let table = Table::new(
            array![[1., 2.], [2., 1.], [3., 3.], [4., 0.]],
            array![0., 1., 1., 1.],
        )?;

        let model = DecisionTree::params().max_depth(0).fit(&table)?;

        assert!(model.root_node().is_leaf());
        assert_eq!(model.depth(), 0);
        assert_eq!(model.num_nodes(), 1);
        assert_eq!(model.root_node().prediction(), Some(1.));
        assert_eq!(model.root_node().samples(), 4);
        assert_abs_diff_eq!(model.root_node().impurity(), 0.375);

        Ok(())
    }

    #[test]
    /// Check that for random data the max depth is respected
    fn check_max_depth() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(42);

        // create very sparse data
        let data = uniform((50, 50), -1., 1., &mut rng);
        let targets = (0..50).map(|x| x as f64).collect::<Array1<_>>();

        let table = Table::new(data, targets)?;

        assert_eq!(DecisionTree::params().max_depth(1).fit(&table)?.depth(), 1);
        for max_depth in &[2, 5, 10, 20] {
            let model = DecisionTree::params().max_depth(*max_depth).fit(&table)?;
            assert!(model.depth() <= *max_depth);
            assert!(model.depth() >= 1);
        }

        Ok(())
    }

    #[test]
    fn internal_nodes_partition_their_samples() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(7);
        let data = uniform((80, 3), 0., 10., &mut rng);
        let targets = data
            .rows()
            .into_iter()
            .map(|row| ((row[0] + row[1]) / 7.).floor())
            .collect::<Array1<_>>();
        let table = Table::new(data, targets)?;

        let model = DecisionTree::params().max_depth(6).fit(&table)?;

        assert_eq!(model.root_node().samples(), 80);
        for node in model.iter_nodes() {
            if let Some((left, right)) = node.children() {
                assert!(left.samples() > 0 && right.samples() > 0);
                assert_eq!(left.samples() + right.samples(), node.samples());
                assert_eq!(left.depth(), node.depth() + 1);
                let weighted = (left.impurity() * left.samples() as f64
                    + right.impurity() * right.samples() as f64)
                    / node.samples() as f64;
                assert!(weighted < node.impurity() + 1e-12);
            } else {
                assert!(node.prediction().is_some());
            }
            let total: usize = node.class_counts().iter().map(|(_, c)| c).sum();
            assert_eq!(total, node.samples());
        }

        Ok(())
    }

    #[test]
    /// Small perfectly separable dataset test
    ///
    /// This dataset of three elements is perfectly using the second feature.
    fn perfectly_separable_small() -> Result<()> {
        let data = array![[1., 2., 3.], [1., 2., 4.], [1., 3., 3.5]];
        let targets = array![0., 0., 1.];

        let table = Table::new(data.clone(), targets)?;
        let model = DecisionTree::params().max_depth(1).fit(&table)?;

        assert_eq!(model.predict(&data)?, array![0., 0., 1.]);
        assert_eq!(model.root_node().split(), Some((1, 3.)));

        Ok(())
    }

    #[test]
    fn sample_on_threshold_follows_training_rule() -> Result<()> {
        let table = Table::new(array![[1.], [2.], [3.], [4.]], array![0., 0., 1., 1.])?;
        let model = DecisionTree::params().fit(&table)?;

        assert_eq!(model.root_node().split(), Some((0, 3.)));
        // a value equal to the threshold was routed right during training
        assert_eq!(model.predict(&array![[3.]])?, array![1.]);
        assert_eq!(model.predict(&array![[2.999]])?, array![0.]);

        Ok(())
    }

    #[test]
    fn display_lists_nodes_indented_by_depth() -> Result<()> {
        let table = Table::new(
            array![[1.], [2.], [3.], [4.], [5.], [6.]],
            array![0., 1., 1., 2., 2., 2.],
        )?;
        let model = DecisionTree::params().fit(&table)?;

        let expected = "\
feature 0 < 4.00 (samples 6, impurity 0.611, classes 0:1 1:2 2:3)
  feature 0 < 2.00 (samples 3, impurity 0.444, classes 0:1 1:2)
    predict 0 (samples 1, impurity 0.000, classes 0:1)
    predict 1 (samples 2, impurity 0.000, classes 1:2)
  predict 2 (samples 3, impurity 0.000, classes 2:3)
";
        assert_eq!(model.to_string(), expected);

        Ok(())
    }

    #[test]
    fn nan_features_are_routed_right() -> Result<()> {
        let table = Table::new(array![[1.], [f64::NAN], [2.], [3.]], array![0., 1., 1., 1.])?;
        let model = DecisionTree::params().fit(&table)?;

        assert_eq!(model.root_node().split(), Some((0, 2.)));
        assert_eq!(model.predict(&array![[f64::NAN], [0.5]])?, array![1., 0.]);

        // NaN targets never reach the tree
        assert_eq!(
            Table::new(array![[1.], [2.]], array![0., f64::NAN]).unwrap_err(),
            Error::InvalidTable(TableError::NonFiniteTarget { index: 1 })
        );

        Ok(())
    }

    #[test]
    fn pure_table_is_a_single_leaf() -> Result<()> {
        let table = Table::new(array![[1., 5.], [2., 6.], [3., 7.]], array![4., 4., 4.])?;
        let model = DecisionTree::params().max_depth(10).fit(&table)?;

        assert_eq!(model.num_nodes(), 1);
        assert_eq!(model.root_node().prediction(), Some(4.));
        assert_eq!(model.root_node().entropy(), 0.);

        Ok(())
    }

    #[test]
    fn indistinguishable_rows_stop_splitting() -> Result<()> {
        // identical records with different labels can not be separated
        let table = Table::new(array![[1., 1.], [1., 1.], [1., 1.]], array![0., 1., 1.])?;
        let model = DecisionTree::params().max_depth(10).fit(&table)?;

        assert!(model.root_node().is_leaf());
        assert_eq!(model.root_node().prediction(), Some(1.));

        Ok(())
    }

    #[test]
    fn min_impurity_decrease_blocks_weak_splits() -> Result<()> {
        let table = Table::new(array![[1.], [2.], [3.], [4.]], array![0., 0., 1., 1.])?;

        // the only useful split decreases the impurity by 0.5
        let model = DecisionTree::params()
            .min_impurity_decrease(0.5)
            .fit(&table)?;
        assert!(model.root_node().is_leaf());

        let model = DecisionTree::params()
            .min_impurity_decrease(0.49)
            .fit(&table)?;
        assert!(!model.root_node().is_leaf());

        Ok(())
    }

    #[test]
    fn prediction_is_idempotent() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(1);
        let data = uniform((40, 4), -1., 1., &mut rng);
        let targets = data.column(2).mapv(|x| if x > 0.3 { 2. } else { 0. });
        let table = Table::new(data, targets)?;

        let model = DecisionTree::params().fit(&table)?;
        let test = uniform((25, 4), -1., 1., &mut rng);

        assert_eq!(model.predict(&test)?, model.predict(&test)?);

        Ok(())
    }

    #[test]
    fn training_accuracy_grows_with_depth() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(11);
        let data = uniform((60, 3), 0., 1., &mut rng);
        let targets = (0..60)
            .map(|_| rng.gen_range(0..3) as f64)
            .collect::<Array1<_>>();
        let table = Table::new(data, targets)?;

        let mut last = 0.0;
        for max_depth in 0..10 {
            let model = DecisionTree::params().max_depth(max_depth).fit(&table)?;
            let accuracy = model.score(table.records(), table.targets())?;
            assert!(accuracy >= last, "depth {} lost accuracy", max_depth);
            last = accuracy;
        }

        Ok(())
    }

    #[test]
    /// Multilabel classification
    fn multilabel_four_uniform() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut data = uniform((40, 2), -1., 1., &mut rng);

        data.outer_iter_mut().enumerate().for_each(|(i, mut p)| {
            if i < 10 {
                p += &array![-2., -2.]
            } else if i < 20 {
                p += &array![-2., 2.];
            } else if i < 30 {
                p += &array![2., -2.];
            } else {
                p += &array![2., 2.];
            }
        });

        let targets = (0..40)
            .map(|x| match x {
                x if x < 10 => 0.,
                x if x < 20 => 1.,
                x if x < 30 => 2.,
                _ => 3.,
            })
            .collect::<Array1<_>>();

        let table = Table::new(data.clone(), targets)?;

        let model = DecisionTree::params().fit(&table)?;
        let accuracy = model.score(&data, table.targets())?;
        assert!(accuracy > 0.99);

        Ok(())
    }

    #[test]
    fn invalid_inputs_are_rejected() -> Result<()> {
        let table = Table::new(array![[1., 2.], [3., 4.]], array![0., 1.])?;
        let model = DecisionTree::params().fit(&table)?;

        assert_eq!(
            model.predict(&array![[1., 2., 3.]]).unwrap_err(),
            Error::InvalidTable(TableError::FeatureMismatch {
                expected: 2,
                got: 3
            })
        );
        assert_eq!(
            model.score(table.records(), &array![0.]).unwrap_err(),
            Error::InvalidTable(TableError::LengthMismatch { rows: 2, labels: 1 })
        );
        assert_eq!(
            model
                .score(&Array2::zeros((0, 2)), &Array1::zeros(0))
                .unwrap_err(),
            Error::EmptyDataset("score")
        );

        let empty = Table::new(Array2::<f64>::zeros((0, 2)), Array1::zeros(0))?;
        assert_eq!(
            DecisionTree::params().fit(&empty).unwrap_err(),
            Error::EmptyDataset("decision tree fitting")
        );

        Ok(())
    }

    #[test]
    fn unchecked_params_are_checked_on_fit() -> Result<()> {
        let table = Table::new(array![[1.], [2.]], array![0., 1.])?;

        let result = DecisionTree::params()
            .min_impurity_decrease(-1.0)
            .fit(&table);
        assert!(matches!(result, Err(Error::Parameters(_))));

        let params = DecisionTree::params().max_depth(3).seed(Some(9)).check()?;
        let model = params.fit(&table)?;
        assert_eq!(model.max_depth(), 3);
        assert_eq!(model.seed(), Some(9));
        assert!(model.discrete_targets());
        assert_eq!(model.feature_names(), &["feature-0"]);

        Ok(())
    }
}
