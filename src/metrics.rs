//! Common metrics for performance evaluation of classifiers
//!
//! Targets are floating point class codes, so a prediction is counted as correct only if it is
//! exactly equal to the ground truth.
use std::fmt;

use ndarray::{ArrayBase, Data, Ix1};

use crate::dataset::{class_counts, Float};
use crate::error::{Error, Result, TableError};

/// Fraction of predictions which exactly match the ground truth
pub fn accuracy<F: Float>(
    prediction: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ground_truth: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Result<F> {
    check_lengths(prediction, ground_truth)?;

    let correct = prediction
        .iter()
        .zip(ground_truth.iter())
        .filter(|(a, b)| a == b)
        .count();

    Ok(F::cast(correct) / F::cast(ground_truth.len()))
}

/// Confusion matrix over the classes seen in either the prediction or the ground truth
///
/// Rows correspond to the ground truth, columns to the prediction. Classes are kept in
/// ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix<F> {
    classes: Vec<F>,
    matrix: Vec<Vec<usize>>,
}

impl<F: Float> ConfusionMatrix<F> {
    pub fn new(
        prediction: &ArrayBase<impl Data<Elem = F>, Ix1>,
        ground_truth: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Self> {
        check_lengths(prediction, ground_truth)?;

        let all = ground_truth
            .iter()
            .chain(prediction.iter())
            .cloned()
            .collect::<ndarray::Array1<F>>();
        let classes = class_counts(&all)
            .into_iter()
            .map(|(class, _)| class)
            .collect::<Vec<_>>();

        let position = |x: &F| classes.iter().position(|c| c == x);

        let mut matrix = vec![vec![0; classes.len()]; classes.len()];
        for (predicted, truth) in prediction.iter().zip(ground_truth.iter()) {
            if let (Some(row), Some(col)) = (position(truth), position(predicted)) {
                matrix[row][col] += 1;
            }
        }

        Ok(ConfusionMatrix { classes, matrix })
    }

    pub fn classes(&self) -> &[F] {
        &self.classes
    }

    /// Number of samples with ground truth `truth` predicted as `predicted`
    pub fn get(&self, truth: usize, predicted: usize) -> usize {
        self.matrix[truth][predicted]
    }

    /// Fraction of samples on the diagonal
    pub fn accuracy(&self) -> F {
        let total: usize = self.matrix.iter().flatten().sum();
        let correct: usize = (0..self.classes.len()).map(|i| self.matrix[i][i]).sum();

        F::cast(correct) / F::cast(total)
    }
}

impl<F: Float> fmt::Display for ConfusionMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:<8}", "truth")?;
        for class in &self.classes {
            write!(f, "{:>8}", class)?;
        }
        writeln!(f)?;

        for (class, row) in self.classes.iter().zip(self.matrix.iter()) {
            write!(f, "{:<8}", class)?;
            for count in row {
                write!(f, "{:>8}", count)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn check_lengths<F>(
    prediction: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ground_truth: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Result<()> {
    if ground_truth.is_empty() {
        return Err(Error::EmptyDataset("accuracy"));
    }
    if prediction.len() != ground_truth.len() {
        return Err(TableError::LengthMismatch {
            rows: prediction.len(),
            labels: ground_truth.len(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn accuracy_uses_exact_matches() -> Result<()> {
        let prediction = array![0., 1., 1., 2.];
        let truth = array![0., 1., 2., 2.];

        assert_abs_diff_eq!(accuracy(&prediction, &truth)?, 0.75);

        Ok(())
    }

    #[test]
    fn accuracy_rejects_invalid_input() {
        assert_eq!(
            accuracy(&array![0., 1.], &array![0.]).unwrap_err(),
            Error::InvalidTable(TableError::LengthMismatch { rows: 2, labels: 1 })
        );
        let empty = ndarray::Array1::<f64>::zeros(0);
        assert_eq!(
            accuracy(&empty, &empty).unwrap_err(),
            Error::EmptyDataset("accuracy")
        );
    }

    #[test]
    fn confusion_matrix_counts_pairs() -> Result<()> {
        let prediction = array![0., 1., 1., 2., 0.];
        let truth = array![0., 1., 2., 2., 1.];

        let cm = ConfusionMatrix::new(&prediction, &truth)?;
        assert_eq!(cm.classes(), &[0., 1., 2.]);
        assert_eq!(cm.get(2, 1), 1);
        assert_eq!(cm.get(1, 0), 1);
        assert_eq!(cm.get(0, 0), 1);
        assert_abs_diff_eq!(cm.accuracy(), 0.6);

        Ok(())
    }
}
