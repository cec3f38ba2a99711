//! Property tests for the binary classification metrics.
//!
//! Ensures the metrics satisfy their mathematical invariants:
//! - Confusion counts partition the aligned length
//! - Complementary rates sum to one whenever both are defined
//! - Alignment is idempotent and never mutates its inputs
//! - F-beta with beta = 1 is the F1 score

use analytics::{
    align, confusion_counts, AnalyticsError, ClassificationReport, ConfusionMetrics, Metric,
    DEFAULT_BETA,
};
use approx::assert_relative_eq;
use core_types::Label;
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

fn label() -> impl Strategy<Value = Label> {
    any::<bool>().prop_map(Label::from)
}

/// Two independent sequences, lengths allowed to differ.
fn label_sequences(
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<Label>, Vec<Label>)> {
    (vec(label(), len.clone()), vec(label(), len))
}

/// Two sequences of the same length.
fn label_pair(
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<Label>, Vec<Label>)> {
    len.prop_flat_map(|l| (vec(label(), l), vec(label(), l)))
}

/// Any finite beta, from ordinary weights up to values whose square overflows.
fn any_beta() -> impl Strategy<Value = f64> {
    prop_oneof![0.0f64..4.0, 1e100f64..1e160, 1e160f64..1e300, -1e200f64..-1e150]
}

fn both_defined(
    a: Result<f64, AnalyticsError>,
    b: Result<f64, AnalyticsError>,
) -> Option<(f64, f64)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Some((a, b)),
        _ => None,
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_counts_partition_aligned_length((gt, pred) in label_sequences(0..64)) {
        let counts = confusion_counts(&gt, &pred);
        prop_assert_eq!(counts.total(), gt.len().max(pred.len()));
    }

    #[test]
    fn prop_align_pads_to_longer_and_preserves_inputs((a, b) in label_sequences(0..64)) {
        let before = (a.clone(), b.clone());
        let (a2, b2) = align(&a, &b);

        prop_assert_eq!(a2.len(), b2.len());
        prop_assert_eq!(a2.len(), a.len().max(b.len()));
        prop_assert_eq!(&a2[..a.len()], a.as_slice());
        prop_assert_eq!(&b2[..b.len()], b.as_slice());
        prop_assert!(a2[a.len()..].iter().all(|l| *l == Label::Negative));
        prop_assert!(b2[b.len()..].iter().all(|l| *l == Label::Negative));
        prop_assert_eq!(&a, &before.0);
        prop_assert_eq!(&b, &before.1);
    }

    #[test]
    fn prop_align_is_idempotent((a, b) in label_sequences(0..64)) {
        let (a2, b2) = align(&a, &b);
        let (a3, b3) = align(&a2, &b2);
        prop_assert_eq!(a3.as_ref(), a2.as_ref());
        prop_assert_eq!(b3.as_ref(), b2.as_ref());
    }

    #[test]
    fn prop_complementary_rates_sum_to_one((gt, pred) in label_sequences(1..64)) {
        let engine = ConfusionMetrics::new();

        if let Some((tpr, fnr)) = both_defined(
            engine.true_positive_rate(&gt, &pred),
            engine.false_negative_rate(&gt, &pred),
        ) {
            assert_relative_eq!(tpr + fnr, 1.0, epsilon = 1e-12);
        }
        if let Some((tnr, fpr)) = both_defined(
            engine.true_negative_rate(&gt, &pred),
            engine.false_positive_rate(&gt, &pred),
        ) {
            assert_relative_eq!(tnr + fpr, 1.0, epsilon = 1e-12);
        }
        if let Some((ppv, fdr)) = both_defined(
            engine.positive_predictive_value(&gt, &pred),
            engine.false_discovery_rate(&gt, &pred),
        ) {
            assert_relative_eq!(ppv + fdr, 1.0, epsilon = 1e-12);
        }
        if let Some((npv, f_or)) = both_defined(
            engine.negative_predictive_value(&gt, &pred),
            engine.false_omission_rate(&gt, &pred),
        ) {
            assert_relative_eq!(npv + f_or, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn prop_accuracy_and_error_rate_are_complementary((gt, pred) in label_sequences(1..64)) {
        let engine = ConfusionMetrics::new();
        let accuracy = engine.accuracy(&gt, &pred).unwrap();
        let error = engine.error_rate(&gt, &pred).unwrap();

        prop_assert!((0.0..=1.0).contains(&accuracy));
        assert_relative_eq!(accuracy + error, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn prop_f_score_with_unit_beta_is_f1((gt, pred) in label_pair(1..64)) {
        let engine = ConfusionMetrics::new();
        if let Some((f1, f_beta)) = both_defined(
            engine.f1_score(&gt, &pred),
            engine.f_score(&gt, &pred, 1.0),
        ) {
            assert_relative_eq!(f1, f_beta, epsilon = 1e-12);
        }
    }

    #[test]
    fn prop_metrics_are_never_nan((gt, pred) in label_sequences(1..64), beta in any_beta()) {
        let engine = ConfusionMetrics::new();
        for metric in Metric::ALL {
            match engine.evaluate(metric, &gt, &pred, beta) {
                Ok(value) => {
                    prop_assert!(!value.is_nan(), "{} produced NaN", metric);
                }
                Err(AnalyticsError::InvalidParameter(_)) => {
                    prop_assert!(metric.uses_beta());
                }
                Err(_) => {}
            }
        }
    }

    #[test]
    fn prop_report_never_fails_for_valid_beta(
        (gt, pred) in label_sequences(0..32),
        beta in 0.0f64..4.0,
    ) {
        let engine = ConfusionMetrics::new();
        let report = ClassificationReport::build(&engine, &gt, &pred, beta);
        prop_assert!(report.is_ok());
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn align_fixes_list_lengths() {
    use Label::{Negative as N, Positive as P};
    let (a, b) = align(&[P, P, P], &[P]);
    assert_eq!(a.as_ref(), &[P, P, P]);
    assert_eq!(b.as_ref(), &[P, N, N]);
}
