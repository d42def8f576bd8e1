//! Confusion matrix accumulation
//!
//! Builds an immutable label×label count matrix from prediction/ground-truth
//! pairs. Labels are arbitrary strings; the matrix is indexed over the sorted
//! distinct labels observed across both sequences. For the two-class case one
//! label is designated positive and the classic TP/FP/TN/FN view applies.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Confusion matrix over the observed label set
///
/// Element [i][j] is the count of samples with true label i predicted as j.
#[derive(Clone, Debug)]
pub struct ConfusionMatrix {
    /// Sorted distinct labels; index order matches the matrix axes
    labels: Vec<String>,
    /// matrix[true_label][predicted_label] = count
    matrix: Vec<Vec<usize>>,
    /// Index of the designated positive label (binary view)
    positive: usize,
}

impl ConfusionMatrix {
    /// Accumulate a confusion matrix from paired predictions and ground truth.
    ///
    /// Both sequences must have equal, non-zero length. `positive_label`
    /// designates the positive class for the binary view; when omitted (or
    /// not among the observed labels) the greatest label in sort order is
    /// used, so 0/1 data gets `1` as positive.
    pub fn accumulate<S: AsRef<str>>(
        y_pred: &[S],
        y_true: &[S],
        positive_label: Option<&str>,
    ) -> Result<Self> {
        if y_pred.len() != y_true.len() || y_pred.is_empty() {
            return Err(Error::ShapeMismatch {
                predictions: y_pred.len(),
                ground_truth: y_true.len(),
            });
        }

        let labels: Vec<String> = y_pred
            .iter()
            .chain(y_true.iter())
            .map(|l| l.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let n = labels.len();
        let index_of = |label: &str| labels.iter().position(|l| l.as_str() == label);

        let mut matrix = vec![vec![0usize; n]; n];
        for (pred, truth) in y_pred.iter().zip(y_true.iter()) {
            // Both labels are in the observed set by construction.
            let i = index_of(truth.as_ref()).unwrap_or(0);
            let j = index_of(pred.as_ref()).unwrap_or(0);
            matrix[i][j] += 1;
        }

        let positive = positive_label
            .and_then(index_of)
            .unwrap_or(n.saturating_sub(1));

        Ok(Self {
            labels,
            matrix,
            positive,
        })
    }

    /// Observed labels in sort order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of distinct classes
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Whether this is a binary (or degenerate single-class) matrix
    pub fn is_binary(&self) -> bool {
        self.labels.len() <= 2
    }

    /// The designated positive label
    pub fn positive_label(&self) -> &str {
        &self.labels[self.positive]
    }

    /// Index of the designated positive class
    pub fn positive_index(&self) -> usize {
        self.positive
    }

    /// Count at [true_label][predicted_label]
    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        self.matrix[true_label][predicted_label]
    }

    /// Total number of evaluated samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Number of correctly classified samples (matrix diagonal)
    pub fn correct(&self) -> usize {
        (0..self.n_classes()).map(|i| self.matrix[i][i]).sum()
    }

    /// True positives for a class
    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// False positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes())
            .filter(|&i| i != class)
            .map(|i| self.matrix[i][class])
            .sum()
    }

    /// False negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes())
            .filter(|&j| j != class)
            .map(|j| self.matrix[class][j])
            .sum()
    }

    /// True negatives for a class
    pub fn true_negatives(&self, class: usize) -> usize {
        self.total()
            - self.true_positives(class)
            - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Support (total true instances) for a class
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        let width = self
            .labels
            .iter()
            .map(|l| l.len())
            .max()
            .unwrap_or(0)
            .max(6);

        write!(f, "{:>width$} ", "")?;
        for label in &self.labels {
            write!(f, "pred:{label:>width$} ")?;
        }
        writeln!(f)?;

        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "true:{label:>width$}")?;
            for j in 0..self.n_classes() {
                write!(f, "{:>width$} ", self.matrix[i][j], width = width + 6)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
