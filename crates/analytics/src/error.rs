use crate::metric::Metric;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Division by zero in metric '{metric}': {denominator}")]
    DivisionByZero {
        metric: Metric,
        denominator: &'static str,
    },

    #[error("Metric '{metric}' is undefined for an empty ground truth sequence")]
    EmptySequence { metric: Metric },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),
}

impl AnalyticsError {
    /// Returns `true` for data-dependent conditions under which a metric simply
    /// has no value, as opposed to caller mistakes.
    pub fn is_undefined_metric(&self) -> bool {
        matches!(
            self,
            AnalyticsError::DivisionByZero { .. } | AnalyticsError::EmptySequence { .. }
        )
    }
}
