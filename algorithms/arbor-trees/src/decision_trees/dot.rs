use super::{DecisionTree, TreeNode};
use arbor::dataset::format_class_counts;
use arbor::Float;
use std::fmt;

/// Struct to print a fitted decision tree as a Graphviz digraph.
///
/// Every tree node becomes one node statement, labelled with its split or prediction, the number
/// of training samples, the Gini impurity and a summary of the class counts. Edges to left
/// children are labelled `True` (the sample satisfies `feature < threshold`), edges to right
/// children `False`. Node identifiers are assigned in pre-order, starting with `node0` for the
/// root.
///
/// ### Usage
///
/// ```rust
/// use arbor::prelude::*;
/// use arbor_trees::DecisionTree;
/// use ndarray::array;
///
/// let table = Table::new(array![[1.], [2.], [3.]], array![0., 0., 1.])?;
/// // Fit the tree
/// let tree = DecisionTree::params().fit(&table)?;
/// // Export to dot
/// let dot = tree.export_to_dot().max_classes(4);
/// let graph = dot.to_string();
/// assert!(graph.starts_with("digraph Tree {"));
/// // Now you can write graph to the preferred destination
/// # Ok::<(), arbor::Error>(())
/// ```
pub struct Dot<'a, F> {
    max_classes: usize,
    feature_names: bool,
    tree: &'a DecisionTree<F>,
}

impl<'a, F: Float> Dot<'a, F> {
    pub fn new(tree: &'a DecisionTree<F>) -> Self {
        Dot {
            max_classes: 10,
            feature_names: false,
            tree,
        }
    }

    /// The maximal number of classes listed in each node
    ///
    /// Nodes with more classes only show how many classes they contain.
    pub fn max_classes(mut self, max_classes: usize) -> Self {
        self.max_classes = max_classes;

        self
    }

    /// Whether splits show the feature name instead of the feature index
    pub fn feature_names(mut self, feature_names: bool) -> Self {
        self.feature_names = feature_names;

        self
    }

    fn class_summary(&self, node: &TreeNode<F>) -> String {
        let counts = node.class_counts();
        if counts.len() > self.max_classes {
            format!("{} classes", counts.len())
        } else {
            format_class_counts(counts)
        }
    }

    fn label(&self, node: &TreeNode<F>) -> String {
        let head = match (node.prediction(), node.split()) {
            (Some(prediction), _) => format!("Prediction: {}", prediction),
            (None, Some((feature_idx, threshold))) => {
                let feature = match self.tree.feature_names().get(feature_idx) {
                    Some(name) if self.feature_names => escape(name),
                    _ => feature_idx.to_string(),
                };
                format!("Feature: {}\\nThreshold: {:.2}", feature, threshold)
            }
            (None, None) => unreachable!("a node is either a leaf or a split"),
        };

        format!(
            "{}\\nSamples: {}\\nImpurity: {:.3}\\nClassCounts: {}",
            head,
            node.samples(),
            node.impurity(),
            self.class_summary(node)
        )
    }

    /// Writes `node` and its subtree, returns the next free identifier
    fn write_node(
        &self,
        f: &mut fmt::Formatter,
        node: &TreeNode<F>,
        id: usize,
    ) -> Result<usize, fmt::Error> {
        writeln!(f, "  node{} [label=\"{}\"];", id, self.label(node))?;

        let mut next = id + 1;
        if let Some((left, right)) = node.children() {
            let left_id = next;
            writeln!(
                f,
                "  node{} -> node{} [labeldistance=2.5, labelangle=45, headlabel=\"True\"];",
                id, left_id
            )?;
            next = self.write_node(f, left, left_id)?;

            let right_id = next;
            writeln!(
                f,
                "  node{} -> node{} [labeldistance=2.5, labelangle=-45, headlabel=\"False\"];",
                id, right_id
            )?;
            next = self.write_node(f, right, right_id)?;
        }

        Ok(next)
    }
}

impl<F: Float> fmt::Display for Dot<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "digraph Tree {{")?;
        writeln!(
            f,
            "node [shape=\"box\", style=\"rounded\", fontname=\"helvetica\"];"
        )?;
        writeln!(f, "edge [fontname=\"helvetica\"];")?;
        self.write_node(f, self.tree.root_node(), 0)?;
        writeln!(f, "}}")
    }
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
