//! Per-position classification and confusion-matrix counts.
//!
//! Every function aligns its inputs first when their lengths differ.

use crate::alignment::align;
use core_types::{ConfusionCounts, Label, Outcome};

/// Classifies every aligned position into a confusion-matrix cell.
pub fn classify(ground_truth: &[Label], predicted: &[Label]) -> Vec<Outcome> {
    let (ground_truth, predicted) = align(ground_truth, predicted);
    ground_truth
        .iter()
        .zip(predicted.iter())
        .map(|(&actual, &guess)| Outcome::classify(actual, guess))
        .collect()
}

/// 0/1 indicator sequence marking the positions that fall into `outcome`.
pub fn indicators(ground_truth: &[Label], predicted: &[Label], outcome: Outcome) -> Vec<u8> {
    classify(ground_truth, predicted)
        .into_iter()
        .map(|cell| u8::from(cell == outcome))
        .collect()
}

/// Positions where a positive was correctly detected.
pub fn true_positives(ground_truth: &[Label], predicted: &[Label]) -> Vec<u8> {
    indicators(ground_truth, predicted, Outcome::TruePositive)
}

/// Positions where a negative was reported as positive (type I errors).
pub fn false_positives(ground_truth: &[Label], predicted: &[Label]) -> Vec<u8> {
    indicators(ground_truth, predicted, Outcome::FalsePositive)
}

/// Positions where a negative was correctly left undetected.
pub fn true_negatives(ground_truth: &[Label], predicted: &[Label]) -> Vec<u8> {
    indicators(ground_truth, predicted, Outcome::TrueNegative)
}

/// Positions where a positive was missed (type II errors).
pub fn false_negatives(ground_truth: &[Label], predicted: &[Label]) -> Vec<u8> {
    indicators(ground_truth, predicted, Outcome::FalseNegative)
}

/// The four scalar confusion counts of an aligned pair.
pub fn confusion_counts(ground_truth: &[Label], predicted: &[Label]) -> ConfusionCounts {
    let counts: ConfusionCounts = classify(ground_truth, predicted).into_iter().collect();
    tracing::debug!(
        tp = counts.true_positives,
        fp = counts.false_positives,
        tn = counts.true_negatives,
        fn_ = counts.false_negatives,
        "Derived confusion counts."
    );
    counts
}
