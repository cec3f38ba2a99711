use crate::confusion::confusion_counts;
use crate::error::AnalyticsError;
use crate::metric::Metric;
use core_types::{ConfusionCounts, Label, count_positives};

/// The F-beta weight used when the caller does not pick one.
pub const DEFAULT_BETA: f64 = 0.5;

const NO_POSITIVES: &str = "no positives in ground truth";
const NO_NEGATIVES: &str = "no negatives in ground truth";
const NO_PREDICTED_POSITIVES: &str = "no positive predictions (TP + FP = 0)";
const NO_PREDICTED_NEGATIVES: &str = "no negative predictions (TN + FN = 0)";
pub(crate) const TNR_IS_ONE: &str = "true negative rate is 1";
pub(crate) const NLR_IS_ZERO: &str = "negative likelihood ratio is 0";

/// A stateless calculator for binary-classification metrics.
///
/// Every method takes the ground truth and the prediction, aligns them when
/// their lengths differ, derives the confusion counts it needs and returns the
/// metric. Nothing is cached between calls.
///
/// Undefined values are never suppressed: a vanishing denominator is returned
/// as `AnalyticsError::DivisionByZero`, an empty ground truth as
/// `AnalyticsError::EmptySequence`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfusionMetrics {}

impl ConfusionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a metric chosen at runtime.
    ///
    /// `beta` is only consulted by `Metric::FScore`. `Metric::Prevalence` is
    /// computed over the ground truth alone.
    pub fn evaluate(
        &self,
        metric: Metric,
        ground_truth: &[Label],
        predicted: &[Label],
        beta: f64,
    ) -> Result<f64, AnalyticsError> {
        tracing::trace!(%metric, "Evaluating metric.");
        let (gt, pred) = (ground_truth, predicted);
        match metric {
            Metric::Prevalence => self.prevalence(gt),
            Metric::Accuracy => self.accuracy(gt, pred),
            Metric::ErrorRate => self.error_rate(gt, pred),
            Metric::TruePositiveRate => self.true_positive_rate(gt, pred),
            Metric::TrueNegativeRate => self.true_negative_rate(gt, pred),
            Metric::FalseNegativeRate => self.false_negative_rate(gt, pred),
            Metric::FalsePositiveRate => self.false_positive_rate(gt, pred),
            Metric::PositivePredictiveValue => self.positive_predictive_value(gt, pred),
            Metric::NegativePredictiveValue => self.negative_predictive_value(gt, pred),
            Metric::FalseDiscoveryRate => self.false_discovery_rate(gt, pred),
            Metric::FalseOmissionRate => self.false_omission_rate(gt, pred),
            Metric::PositiveLikelihoodRatio => self.positive_likelihood_ratio(gt, pred),
            Metric::NegativeLikelihoodRatio => self.negative_likelihood_ratio(gt, pred),
            Metric::DiagnosticOddsRatio => self.diagnostic_odds_ratio(gt, pred),
            Metric::PositiveUnlikelihoodRatio => self.positive_unlikelihood_ratio(gt, pred),
            Metric::NegativeUnlikelihoodRatio => self.negative_unlikelihood_ratio(gt, pred),
            Metric::UndiagnosticOddsRatio => self.undiagnostic_odds_ratio(gt, pred),
            Metric::DiagnosticDisoddsRatio => self.diagnostic_disodds_ratio(gt, pred),
            Metric::UndiagnosticDisoddsRatio => self.undiagnostic_disodds_ratio(gt, pred),
            Metric::F1Score => self.f1_score(gt, pred),
            Metric::FScore => self.f_score(gt, pred, beta),
        }
    }

    // --- Counts ---

    /// The confusion counts of the aligned pair.
    pub fn counts(&self, ground_truth: &[Label], predicted: &[Label]) -> ConfusionCounts {
        confusion_counts(ground_truth, predicted)
    }

    /// Counts for a metric, refusing an empty ground truth.
    fn counts_for(
        &self,
        metric: Metric,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<ConfusionCounts, AnalyticsError> {
        if ground_truth.is_empty() {
            return Err(AnalyticsError::EmptySequence { metric });
        }
        Ok(confusion_counts(ground_truth, predicted))
    }

    // --- Dataset measurements ---

    /// Fraction of positives in a sequence.
    pub fn prevalence(&self, labels: &[Label]) -> Result<f64, AnalyticsError> {
        if labels.is_empty() {
            return Err(AnalyticsError::EmptySequence {
                metric: Metric::Prevalence,
            });
        }
        Ok(count_positives(labels) as f64 / labels.len() as f64)
    }

    /// (TP + TN) / N over the aligned length.
    pub fn accuracy(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::Accuracy;
        let c = self.counts_for(m, ground_truth, predicted)?;
        ratio(m, c.true_positives + c.true_negatives, c.total(), "empty aligned sequences")
    }

    /// (FP + FN) / N over the aligned length.
    pub fn error_rate(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::ErrorRate;
        let c = self.counts_for(m, ground_truth, predicted)?;
        ratio(m, c.false_positives + c.false_negatives, c.total(), "empty aligned sequences")
    }

    // --- Rates ---

    /// Sensitivity / recall: TP / positives in ground truth.
    pub fn true_positive_rate(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::TruePositiveRate;
        tpr(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    /// Specificity: TN / negatives in ground truth.
    pub fn true_negative_rate(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::TrueNegativeRate;
        tnr(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    /// Miss rate: FN / positives in ground truth.
    pub fn false_negative_rate(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::FalseNegativeRate;
        fnr(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    /// Fall-out: FP / negatives in ground truth.
    pub fn false_positive_rate(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::FalsePositiveRate;
        fpr(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    // --- Predictive values ---

    /// Precision: TP / (TP + FP).
    ///
    /// The formula is not clamped; with consistent counts it stays in [0, 1].
    pub fn positive_predictive_value(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::PositivePredictiveValue;
        ppv(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    /// TN / (TN + FN).
    pub fn negative_predictive_value(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::NegativePredictiveValue;
        npv(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    /// FP / (TP + FP).
    pub fn false_discovery_rate(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::FalseDiscoveryRate;
        let c = self.counts_for(m, ground_truth, predicted)?;
        ratio(m, c.false_positives, c.predicted_positives(), NO_PREDICTED_POSITIVES)
    }

    /// FN / (TN + FN).
    pub fn false_omission_rate(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::FalseOmissionRate;
        let c = self.counts_for(m, ground_truth, predicted)?;
        ratio(m, c.false_negatives, c.predicted_negatives(), NO_PREDICTED_NEGATIVES)
    }

    // --- Likelihood ratios ---

    /// TPR / (1 - TNR).
    pub fn positive_likelihood_ratio(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::PositiveLikelihoodRatio;
        plr(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    /// (1 - TPR) / TNR.
    pub fn negative_likelihood_ratio(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::NegativeLikelihoodRatio;
        nlr(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    /// PLR / NLR.
    pub fn diagnostic_odds_ratio(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::DiagnosticOddsRatio;
        let c = self.counts_for(m, ground_truth, predicted)?;
        divide(m, plr(m, &c)?, nlr(m, &c)?, NLR_IS_ZERO)
    }

    /// FPR / TPR.
    pub fn positive_unlikelihood_ratio(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::PositiveUnlikelihoodRatio;
        pur(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    /// FNR / TNR.
    pub fn negative_unlikelihood_ratio(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::NegativeUnlikelihoodRatio;
        nur(m, &self.counts_for(m, ground_truth, predicted)?)
    }

    /// NLR / PLR, the inverse of the diagnostic odds ratio.
    pub fn undiagnostic_odds_ratio(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::UndiagnosticOddsRatio;
        let c = self.counts_for(m, ground_truth, predicted)?;
        divide(m, nlr(m, &c)?, plr(m, &c)?, "positive likelihood ratio is 0")
    }

    /// Positive unlikelihood ratio / negative unlikelihood ratio.
    pub fn diagnostic_disodds_ratio(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::DiagnosticDisoddsRatio;
        let c = self.counts_for(m, ground_truth, predicted)?;
        divide(m, pur(m, &c)?, nur(m, &c)?, "negative unlikelihood ratio is 0")
    }

    /// Negative unlikelihood ratio / positive unlikelihood ratio.
    pub fn undiagnostic_disodds_ratio(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::UndiagnosticDisoddsRatio;
        let c = self.counts_for(m, ground_truth, predicted)?;
        divide(m, nur(m, &c)?, pur(m, &c)?, "positive unlikelihood ratio is 0")
    }

    // --- F scores ---

    /// Harmonic mean of TPR and PPV: 2 / (1/TPR + 1/PPV).
    pub fn f1_score(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::F1Score;
        let c = self.counts_for(m, ground_truth, predicted)?;
        let recall = tpr(m, &c)?;
        let precision = ppv(m, &c)?;
        let inverse_recall = divide(m, 1.0, recall, "true positive rate is 0")?;
        let inverse_precision = divide(m, 1.0, precision, "positive predictive value is 0")?;
        Ok(2.0 / (inverse_recall + inverse_precision))
    }

    /// F-beta score, weighting recall `beta` times as much as precision.
    ///
    /// Computed as `(1+β²)·TPR / [(1+β²)·TPR + β²·FNR + FP/P]` where `P` is
    /// the number of positives in the ground truth, which is the count form
    /// `(1+β²)·TP / [(1+β²)·TP + β²·FN + FP]`. With `beta = 1` this is the F1
    /// score.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `beta` is not finite or `β²` overflows.
    pub fn f_score(
        &self,
        ground_truth: &[Label],
        predicted: &[Label],
        beta: f64,
    ) -> Result<f64, AnalyticsError> {
        let m = Metric::FScore;
        let weight = beta * beta;
        if !weight.is_finite() {
            return Err(AnalyticsError::InvalidParameter(format!(
                "beta must be a finite number whose square is finite, got {beta}"
            )));
        }
        let c = self.counts_for(m, ground_truth, predicted)?;
        let recall = tpr(m, &c)?;
        let miss_rate = fnr(m, &c)?;
        let false_positives_per_positive =
            ratio(m, c.false_positives, c.actual_positives(), NO_POSITIVES)?;

        let numerator = (1.0 + weight) * recall;
        let denominator = numerator + weight * miss_rate + false_positives_per_positive;
        if !denominator.is_finite() {
            return Err(AnalyticsError::InvalidParameter(format!(
                "beta {beta} is too large to weight the score"
            )));
        }
        divide(m, numerator, denominator, "no true positives, false negatives or false positives")
    }
}

// --- Closed-form expressions over counts ---
//
// Each helper is tagged with the metric the caller asked for, so a failure deep
// in a composite (e.g. the TNR inside a DOR) is reported against the composite.

fn ratio(
    metric: Metric,
    numerator: usize,
    denominator: usize,
    reason: &'static str,
) -> Result<f64, AnalyticsError> {
    divide(metric, numerator as f64, denominator as f64, reason)
}

fn divide(
    metric: Metric,
    numerator: f64,
    denominator: f64,
    reason: &'static str,
) -> Result<f64, AnalyticsError> {
    if denominator == 0.0 {
        return Err(AnalyticsError::DivisionByZero {
            metric,
            denominator: reason,
        });
    }
    Ok(numerator / denominator)
}

fn tpr(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    ratio(m, c.true_positives, c.actual_positives(), NO_POSITIVES)
}

fn tnr(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    ratio(m, c.true_negatives, c.actual_negatives(), NO_NEGATIVES)
}

fn fnr(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    ratio(m, c.false_negatives, c.actual_positives(), NO_POSITIVES)
}

fn fpr(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    ratio(m, c.false_positives, c.actual_negatives(), NO_NEGATIVES)
}

fn ppv(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    ratio(m, c.true_positives, c.predicted_positives(), NO_PREDICTED_POSITIVES)
}

fn npv(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    ratio(m, c.true_negatives, c.predicted_negatives(), NO_PREDICTED_NEGATIVES)
}

fn plr(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    divide(m, tpr(m, c)?, 1.0 - tnr(m, c)?, TNR_IS_ONE)
}

fn nlr(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    divide(m, 1.0 - tpr(m, c)?, tnr(m, c)?, "true negative rate is 0")
}

fn pur(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    divide(m, fpr(m, c)?, tpr(m, c)?, "true positive rate is 0")
}

fn nur(m: Metric, c: &ConfusionCounts) -> Result<f64, AnalyticsError> {
    divide(m, fnr(m, c)?, tnr(m, c)?, "true negative rate is 0")
}
