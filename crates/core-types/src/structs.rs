use crate::enums::Outcome;
use serde::{Deserialize, Serialize};

/// The four confusion-matrix counts derived from an aligned pair of sequences.
///
/// Invariant: the four counts sum to the aligned sequence length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    pub fn new(
        true_positives: usize,
        false_positives: usize,
        true_negatives: usize,
        false_negatives: usize,
    ) -> Self {
        Self {
            true_positives,
            false_positives,
            true_negatives,
            false_negatives,
        }
    }

    /// Adds one classified position to the tally.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::TruePositive => self.true_positives += 1,
            Outcome::FalsePositive => self.false_positives += 1,
            Outcome::TrueNegative => self.true_negatives += 1,
            Outcome::FalseNegative => self.false_negatives += 1,
        }
    }

    /// Returns the count for a single confusion-matrix cell.
    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::TruePositive => self.true_positives,
            Outcome::FalsePositive => self.false_positives,
            Outcome::TrueNegative => self.true_negatives,
            Outcome::FalseNegative => self.false_negatives,
        }
    }

    /// Total number of classified positions (the aligned length).
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// Positives in the ground truth (TP + FN).
    pub fn actual_positives(&self) -> usize {
        self.true_positives + self.false_negatives
    }

    /// Negatives in the ground truth (TN + FP).
    pub fn actual_negatives(&self) -> usize {
        self.true_negatives + self.false_positives
    }

    /// Positives in the prediction (TP + FP).
    pub fn predicted_positives(&self) -> usize {
        self.true_positives + self.false_positives
    }

    /// Negatives in the prediction (TN + FN).
    pub fn predicted_negatives(&self) -> usize {
        self.true_negatives + self.false_negatives
    }
}

impl FromIterator<Outcome> for ConfusionCounts {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut counts = Self::default();
        for outcome in iter {
            counts.record(outcome);
        }
        counts
    }
}
