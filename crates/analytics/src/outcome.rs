use crate::error::AnalyticsError;
use serde::Serialize;

/// The tagged result of evaluating one metric for a report.
///
/// A metric whose denominator vanished (or whose ground truth was empty) is
/// `Undefined` with the reason; anything else that went wrong is not an
/// outcome at all and stays an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricOutcome {
    Defined { value: f64 },
    Undefined { reason: String },
}

impl MetricOutcome {
    /// Converts a core metric result, keeping caller errors as errors.
    pub fn from_result(result: Result<f64, AnalyticsError>) -> Result<Self, AnalyticsError> {
        match result {
            Ok(value) => Ok(MetricOutcome::Defined { value }),
            Err(e) if e.is_undefined_metric() => Ok(MetricOutcome::Undefined {
                reason: e.to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            MetricOutcome::Defined { value } => Some(*value),
            MetricOutcome::Undefined { .. } => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, MetricOutcome::Defined { .. })
    }
}
