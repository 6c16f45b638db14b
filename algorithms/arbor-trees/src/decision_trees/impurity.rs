//! Impurity measures over a set of class labels
//!
//! Each measure comes in two flavours: one over a label vector and one over the ordered
//! `(class, count)` association produced by [`arbor::dataset::class_counts`]. The tree builder
//! counts classes once per node and derives every statistic from the counts.
use arbor::dataset::class_counts;
use arbor::Float;
use ndarray::{ArrayBase, Data, Ix1};

/// Gini impurity `1 - Σ p_c²` of a label vector
pub fn gini<F: Float>(y: &ArrayBase<impl Data<Elem = F>, Ix1>) -> F {
    gini_from_counts(&class_counts(y))
}

/// Entropy `-Σ p_c log2(p_c)` of a label vector
pub fn entropy<F: Float>(y: &ArrayBase<impl Data<Elem = F>, Ix1>) -> F {
    entropy_from_counts(&class_counts(y))
}

/// Most frequent class of a label vector
///
/// Ties are broken in favour of the smallest class value.
///
/// ### Panics
///
/// If `y` is empty
pub fn majority_vote<F: Float>(y: &ArrayBase<impl Data<Elem = F>, Ix1>) -> F {
    majority_from_counts(&class_counts(y))
}

/// Given the class counts calculates the gini impurity of the subset.
pub fn gini_from_counts<F: Float>(counts: &[(F, usize)]) -> F {
    let n_samples = total(counts);
    assert!(n_samples > F::zero());

    let purity = counts
        .iter()
        .map(|(_, count)| F::cast(*count) / n_samples)
        .map(|x| x * x)
        .sum::<F>();

    F::one() - purity
}

/// Given the class counts calculates the entropy of the subset.
pub fn entropy_from_counts<F: Float>(counts: &[(F, usize)]) -> F {
    let n_samples = total(counts);
    assert!(n_samples > F::zero());

    counts
        .iter()
        .map(|(_, count)| F::cast(*count) / n_samples)
        .map(|x| if x > F::zero() { -x * x.log2() } else { F::zero() })
        .sum()
}

/// Finds the most frequent class in an ordered class count association. If two
/// classes have the same count then the one listed first, i.e. the smaller class, is returned.
pub fn majority_from_counts<F: Float>(counts: &[(F, usize)]) -> F {
    let (class, _) = counts
        .iter()
        .fold(None, |acc: Option<&(F, usize)>, item| match acc {
            Some(best) if best.1 >= item.1 => Some(best),
            _ => Some(item),
        })
        .expect("majority vote of an empty label set");

    *class
}

fn total<F: Float>(counts: &[(F, usize)]) -> F {
    F::cast(counts.iter().map(|(_, count)| count).sum::<usize>())
}
