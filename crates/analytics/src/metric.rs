//! The catalogue of supported metrics.
//!
//! Each metric has exactly one canonical name and implementation; the short
//! names people actually type (`tpr`, `recall`, `ppv`, ...) resolve through an
//! alias table onto the same variant.

use crate::engine::{NLR_IS_ZERO, TNR_IS_ONE};
use crate::error::AnalyticsError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Report grouping for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Prevalence,
    PositiveClass,
    NegativeClass,
    LikelihoodRatios,
    UnlikelihoodRatios,
    Summary,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Prevalence => "Prevalence",
            Section::PositiveClass => "Positive class",
            Section::NegativeClass => "Negative class",
            Section::LikelihoodRatios => "Likelihood ratios",
            Section::UnlikelihoodRatios => "Unlikelihood ratios",
            Section::Summary => "Summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Prevalence,
    Accuracy,
    ErrorRate,
    TruePositiveRate,
    TrueNegativeRate,
    FalseNegativeRate,
    FalsePositiveRate,
    PositivePredictiveValue,
    NegativePredictiveValue,
    FalseDiscoveryRate,
    FalseOmissionRate,
    PositiveLikelihoodRatio,
    NegativeLikelihoodRatio,
    DiagnosticOddsRatio,
    PositiveUnlikelihoodRatio,
    NegativeUnlikelihoodRatio,
    UndiagnosticOddsRatio,
    DiagnosticDisoddsRatio,
    UndiagnosticDisoddsRatio,
    F1Score,
    FScore,
}

impl Metric {
    /// Every metric, in dependency order.
    pub const ALL: [Metric; 21] = [
        Metric::Prevalence,
        Metric::Accuracy,
        Metric::ErrorRate,
        Metric::TruePositiveRate,
        Metric::TrueNegativeRate,
        Metric::FalseNegativeRate,
        Metric::FalsePositiveRate,
        Metric::PositivePredictiveValue,
        Metric::NegativePredictiveValue,
        Metric::FalseDiscoveryRate,
        Metric::FalseOmissionRate,
        Metric::PositiveLikelihoodRatio,
        Metric::NegativeLikelihoodRatio,
        Metric::DiagnosticOddsRatio,
        Metric::PositiveUnlikelihoodRatio,
        Metric::NegativeUnlikelihoodRatio,
        Metric::UndiagnosticOddsRatio,
        Metric::DiagnosticDisoddsRatio,
        Metric::UndiagnosticDisoddsRatio,
        Metric::F1Score,
        Metric::FScore,
    ];

    /// Canonical snake_case name. Matches the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Prevalence => "prevalence",
            Metric::Accuracy => "accuracy",
            Metric::ErrorRate => "error_rate",
            Metric::TruePositiveRate => "true_positive_rate",
            Metric::TrueNegativeRate => "true_negative_rate",
            Metric::FalseNegativeRate => "false_negative_rate",
            Metric::FalsePositiveRate => "false_positive_rate",
            Metric::PositivePredictiveValue => "positive_predictive_value",
            Metric::NegativePredictiveValue => "negative_predictive_value",
            Metric::FalseDiscoveryRate => "false_discovery_rate",
            Metric::FalseOmissionRate => "false_omission_rate",
            Metric::PositiveLikelihoodRatio => "positive_likelihood_ratio",
            Metric::NegativeLikelihoodRatio => "negative_likelihood_ratio",
            Metric::DiagnosticOddsRatio => "diagnostic_odds_ratio",
            Metric::PositiveUnlikelihoodRatio => "positive_unlikelihood_ratio",
            Metric::NegativeUnlikelihoodRatio => "negative_unlikelihood_ratio",
            Metric::UndiagnosticOddsRatio => "undiagnostic_odds_ratio",
            Metric::DiagnosticDisoddsRatio => "diagnostic_disodds_ratio",
            Metric::UndiagnosticDisoddsRatio => "undiagnostic_disodds_ratio",
            Metric::F1Score => "f1_score",
            Metric::FScore => "f_score",
        }
    }

    /// Short names accepted in addition to the canonical one.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Metric::Prevalence => &[],
            Metric::Accuracy => &["acc"],
            Metric::ErrorRate => &["error", "err"],
            Metric::TruePositiveRate => &["tpr", "sensitivity", "recall", "hit_rate"],
            Metric::TrueNegativeRate => &["tnr", "specificity", "selectivity"],
            Metric::FalseNegativeRate => &["fnr", "miss_rate"],
            Metric::FalsePositiveRate => &["fpr", "fall_out"],
            Metric::PositivePredictiveValue => &["ppv", "precision"],
            Metric::NegativePredictiveValue => &["npv"],
            Metric::FalseDiscoveryRate => &["fdr"],
            Metric::FalseOmissionRate => &["for"],
            Metric::PositiveLikelihoodRatio => &["plr", "lr+"],
            Metric::NegativeLikelihoodRatio => &["nlr", "lr-"],
            Metric::DiagnosticOddsRatio => &["dor"],
            Metric::PositiveUnlikelihoodRatio => &["pur"],
            Metric::NegativeUnlikelihoodRatio => &["nur"],
            Metric::UndiagnosticOddsRatio => &["udor"],
            Metric::DiagnosticDisoddsRatio => &["ddr"],
            Metric::UndiagnosticDisoddsRatio => &["uddr"],
            Metric::F1Score => &["f1", "balanced_f_score"],
            Metric::FScore => &["fbeta", "f_beta"],
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Prevalence => "prevalence",
            Metric::Accuracy => "accuracy",
            Metric::ErrorRate => "error rate",
            Metric::TruePositiveRate => "true positive rate",
            Metric::TrueNegativeRate => "true negative rate",
            Metric::FalseNegativeRate => "false negative rate",
            Metric::FalsePositiveRate => "false positive rate",
            Metric::PositivePredictiveValue => "positive predictive value",
            Metric::NegativePredictiveValue => "negative predictive value",
            Metric::FalseDiscoveryRate => "false discovery rate",
            Metric::FalseOmissionRate => "false omission rate",
            Metric::PositiveLikelihoodRatio => "positive likelihood ratio",
            Metric::NegativeLikelihoodRatio => "negative likelihood ratio",
            Metric::DiagnosticOddsRatio => "diagnostic odds ratio",
            Metric::PositiveUnlikelihoodRatio => "positive unlikelihood ratio",
            Metric::NegativeUnlikelihoodRatio => "negative unlikelihood ratio",
            Metric::UndiagnosticOddsRatio => "undiagnostic odds ratio",
            Metric::DiagnosticDisoddsRatio => "diagnostic disodds ratio",
            Metric::UndiagnosticDisoddsRatio => "undiagnostic disodds ratio",
            Metric::F1Score => "f1 score",
            Metric::FScore => "f-beta score",
        }
    }

    /// How to read the value, where there is a useful rule of thumb.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Metric::PositiveLikelihoodRatio => Some("bigger is better"),
            Metric::NegativeLikelihoodRatio => Some("smaller is better"),
            Metric::DiagnosticOddsRatio => Some("above 1 discriminates correctly"),
            _ => None,
        }
    }

    /// Extra explanation for a failed evaluation, given only when `error` is
    /// the specific condition the explanation describes.
    pub fn undefined_note(&self, error: &AnalyticsError) -> Option<&'static str> {
        let AnalyticsError::DivisionByZero { metric, denominator } = error else {
            return None;
        };
        if metric != self {
            return None;
        }
        match (self, *denominator) {
            (Metric::DiagnosticOddsRatio, NLR_IS_ZERO) => {
                Some("undefined when every positive is detected")
            }
            (Metric::PositiveLikelihoodRatio, TNR_IS_ONE) => {
                Some("undefined when there are no false positives")
            }
            _ => None,
        }
    }

    /// Whether the metric takes the F-beta weight.
    pub fn uses_beta(&self) -> bool {
        matches!(self, Metric::FScore)
    }

    pub fn section(&self) -> Section {
        match self {
            Metric::Prevalence => Section::Prevalence,
            Metric::TruePositiveRate
            | Metric::FalsePositiveRate
            | Metric::PositivePredictiveValue
            | Metric::FalseDiscoveryRate => Section::PositiveClass,
            Metric::TrueNegativeRate
            | Metric::FalseNegativeRate
            | Metric::NegativePredictiveValue
            | Metric::FalseOmissionRate => Section::NegativeClass,
            Metric::PositiveLikelihoodRatio
            | Metric::NegativeLikelihoodRatio
            | Metric::DiagnosticOddsRatio => Section::LikelihoodRatios,
            Metric::PositiveUnlikelihoodRatio
            | Metric::NegativeUnlikelihoodRatio
            | Metric::UndiagnosticOddsRatio
            | Metric::DiagnosticDisoddsRatio
            | Metric::UndiagnosticDisoddsRatio => Section::UnlikelihoodRatios,
            Metric::Accuracy | Metric::ErrorRate | Metric::F1Score | Metric::FScore => {
                Section::Summary
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = AnalyticsError;

    /// Resolves a canonical name or alias. Case, `-` and spaces are ignored
    /// in favour of the snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        // `lr+` / `lr-` are aliases in their own right, so keep the raw form too.
        let raw = s.trim().to_ascii_lowercase();

        Metric::ALL
            .into_iter()
            .find(|metric| {
                metric.name() == key
                    || metric.aliases().iter().any(|alias| *alias == key || *alias == raw)
            })
            .ok_or_else(|| AnalyticsError::UnknownMetric(s.trim().to_string()))
    }
}
