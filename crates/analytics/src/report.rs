use crate::alignment::padding;
use crate::engine::ConfusionMetrics;
use crate::error::AnalyticsError;
use crate::metric::{Metric, Section};
use crate::outcome::MetricOutcome;
use core_types::{ConfusionCounts, Label};
use serde::Serialize;

/// Order in which metrics appear in a report.
pub const REPORT_ORDER: [Metric; 20] = [
    Metric::TruePositiveRate,
    Metric::FalsePositiveRate,
    Metric::PositivePredictiveValue,
    Metric::FalseDiscoveryRate,
    Metric::TrueNegativeRate,
    Metric::FalseNegativeRate,
    Metric::NegativePredictiveValue,
    Metric::FalseOmissionRate,
    Metric::PositiveLikelihoodRatio,
    Metric::NegativeLikelihoodRatio,
    Metric::DiagnosticOddsRatio,
    Metric::PositiveUnlikelihoodRatio,
    Metric::NegativeUnlikelihoodRatio,
    Metric::UndiagnosticOddsRatio,
    Metric::DiagnosticDisoddsRatio,
    Metric::UndiagnosticDisoddsRatio,
    Metric::Accuracy,
    Metric::ErrorRate,
    Metric::F1Score,
    Metric::FScore,
];

/// One evaluated metric inside a `ClassificationReport`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricEntry {
    pub metric: Metric,
    pub section: Section,
    #[serde(flatten)]
    pub outcome: MetricOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// Every metric for one (ground truth, prediction) pair.
///
/// This is the data transfer object behind the human-readable report. It is
/// built entirely from the core calculator; a metric without a value is kept
/// as an `Undefined` entry instead of aborting the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub beta: f64,
    pub ground_truth: Vec<Label>,
    pub predicted: Vec<Label>,
    pub aligned_len: usize,
    /// Negatives appended to the ground truth by alignment.
    pub ground_truth_padding: usize,
    /// Negatives appended to the prediction by alignment.
    pub predicted_padding: usize,
    pub counts: ConfusionCounts,
    pub ground_truth_prevalence: MetricOutcome,
    pub predicted_prevalence: MetricOutcome,
    pub metrics: Vec<MetricEntry>,
}

impl ClassificationReport {
    /// Evaluates every metric in `REPORT_ORDER`.
    ///
    /// # Errors
    ///
    /// Only caller mistakes (currently a non-finite `beta`) are errors.
    pub fn build(
        engine: &ConfusionMetrics,
        ground_truth: &[Label],
        predicted: &[Label],
        beta: f64,
    ) -> Result<Self, AnalyticsError> {
        let counts = engine.counts(ground_truth, predicted);
        let (ground_truth_padding, predicted_padding) =
            padding(ground_truth.len(), predicted.len());

        let metrics = REPORT_ORDER
            .into_iter()
            .map(|metric| {
                let result = engine.evaluate(metric, ground_truth, predicted, beta);
                let note = result.as_ref().err().and_then(|e| metric.undefined_note(e));
                let outcome = MetricOutcome::from_result(result)?;
                Ok(MetricEntry {
                    metric,
                    section: metric.section(),
                    outcome,
                    hint: metric.hint(),
                    note,
                })
            })
            .collect::<Result<Vec<_>, AnalyticsError>>()?;

        let undefined = metrics.iter().filter(|entry| !entry.outcome.is_defined()).count();
        tracing::debug!(aligned_len = counts.total(), undefined, "Built classification report.");

        Ok(Self {
            beta,
            ground_truth: ground_truth.to_vec(),
            predicted: predicted.to_vec(),
            aligned_len: counts.total(),
            ground_truth_padding,
            predicted_padding,
            counts,
            ground_truth_prevalence: MetricOutcome::from_result(engine.prevalence(ground_truth))?,
            predicted_prevalence: MetricOutcome::from_result(engine.prevalence(predicted))?,
            metrics,
        })
    }

    /// The entry for a metric, if it is part of the report.
    pub fn get(&self, metric: Metric) -> Option<&MetricEntry> {
        self.metrics.iter().find(|entry| entry.metric == metric)
    }

    /// Entries grouped by section, in report order.
    pub fn sections(&self) -> Vec<(Section, Vec<&MetricEntry>)> {
        self.metrics
            .chunk_by(|a, b| a.section == b.section)
            .map(|chunk| (chunk[0].section, chunk.iter().collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DEFAULT_BETA;
    use core_types::parse_labels;

    fn labels(text: &str) -> Vec<Label> {
        parse_labels(text).unwrap()
    }

    #[test]
    fn report_keeps_undefined_metrics_as_entries() {
        let engine = ConfusionMetrics::new();
        let gt = labels("1,1,0,1,1,0,1,1,1,1,1,0,0");
        let pred = labels("0");
        let report = ClassificationReport::build(&engine, &gt, &pred, DEFAULT_BETA).unwrap();

        assert_eq!(report.metrics.len(), REPORT_ORDER.len());
        assert_eq!(report.aligned_len, 13);
        assert_eq!(report.predicted_padding, 12);
        assert_eq!(report.ground_truth_padding, 0);
        assert_eq!(report.counts, ConfusionCounts::new(0, 0, 4, 9));

        let ppv = report.get(Metric::PositivePredictiveValue).unwrap();
        assert!(!ppv.outcome.is_defined());
        assert_eq!(report.get(Metric::TruePositiveRate).unwrap().outcome.value(), Some(0.0));
        assert_eq!(report.predicted_prevalence.value(), Some(0.0));
        // Inputs are recorded as given, not as aligned.
        assert_eq!(report.predicted, pred);
    }

    #[test]
    fn undefined_dor_carries_a_note() {
        let engine = ConfusionMetrics::new();
        // Every positive detected with one false positive: NLR is 0.
        let gt = labels("1,0,1,0");
        let pred = labels("1,1,1,0");
        let report = ClassificationReport::build(&engine, &gt, &pred, 1.0).unwrap();

        let dor = report.get(Metric::DiagnosticOddsRatio).unwrap();
        assert!(!dor.outcome.is_defined());
        assert_eq!(dor.note, Some("undefined when every positive is detected"));
        assert_eq!(report.get(Metric::Accuracy).unwrap().note, None);

        let plr = report.get(Metric::PositiveLikelihoodRatio).unwrap();
        assert_eq!(plr.outcome.value(), Some(2.0));
        assert_eq!(plr.hint, Some("bigger is better"));
    }

    #[test]
    fn undefined_plr_notes_missing_false_positives() {
        let engine = ConfusionMetrics::new();
        let gt = labels("1,0,1,0");
        let report = ClassificationReport::build(&engine, &gt, &gt, 1.0).unwrap();

        let plr = report.get(Metric::PositiveLikelihoodRatio).unwrap();
        assert!(!plr.outcome.is_defined());
        assert_eq!(plr.note, Some("undefined when there are no false positives"));
        // DOR fails on the same TNR, which is not the condition its note describes.
        assert_eq!(report.get(Metric::DiagnosticOddsRatio).unwrap().note, None);
    }

    #[test]
    fn notes_are_withheld_when_the_cause_differs() {
        let engine = ConfusionMetrics::new();
        let report =
            ClassificationReport::build(&engine, &labels("0,0"), &labels("0,1"), 1.0).unwrap();

        for metric in [Metric::DiagnosticOddsRatio, Metric::PositiveLikelihoodRatio] {
            let entry = report.get(metric).unwrap();
            assert!(!entry.outcome.is_defined());
            assert_eq!(entry.note, None);
        }
    }

    #[test]
    fn sections_follow_report_order() {
        let engine = ConfusionMetrics::new();
        let gt = labels("1,0,1,0");
        let pred = labels("1,1,0,0");
        let report = ClassificationReport::build(&engine, &gt, &pred, DEFAULT_BETA).unwrap();

        let titles: Vec<Section> = report.sections().into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            titles,
            vec![
                Section::PositiveClass,
                Section::NegativeClass,
                Section::LikelihoodRatios,
                Section::UnlikelihoodRatios,
                Section::Summary,
            ]
        );
    }

    #[test]
    fn invalid_beta_fails_the_whole_report() {
        let engine = ConfusionMetrics::new();
        let gt = labels("1,0");
        let result = ClassificationReport::build(&engine, &gt, &gt, f64::NAN);
        assert!(matches!(result, Err(AnalyticsError::InvalidParameter(_))));
    }

    #[test]
    fn empty_ground_truth_yields_an_all_undefined_report() {
        let engine = ConfusionMetrics::new();
        let report =
            ClassificationReport::build(&engine, &[], &labels("1"), DEFAULT_BETA).unwrap();

        assert!(report.metrics.iter().all(|entry| !entry.outcome.is_defined()));
        assert!(!report.ground_truth_prevalence.is_defined());
        assert_eq!(report.predicted_prevalence.value(), Some(1.0));
    }

    #[test]
    fn serializes_entries_flat() {
        let engine = ConfusionMetrics::new();
        let gt = labels("1,0");
        let report = ClassificationReport::build(&engine, &gt, &gt, DEFAULT_BETA).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        let first = &json["metrics"][0];
        assert_eq!(first["metric"], "true_positive_rate");
        assert_eq!(first["section"], "positive_class");
        assert_eq!(first["status"], "defined");
        assert_eq!(first["value"], 1.0);
        assert_eq!(json["ground_truth"], serde_json::json!([1, 0]));
        assert_eq!(json["counts"]["true_negatives"], 1);
    }
}
