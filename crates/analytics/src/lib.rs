//! # Binary Classification Analytics
//!
//! This crate computes the standard evaluation metrics of a binary classifier
//! from two label sequences: the ground truth and the prediction.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   terminals, files or configuration. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** `ConfusionMetrics` is a stateless calculator.
//!   Every call derives its own confusion counts from the inputs it is given,
//!   so it is safe to call from any number of threads.
//! - **Explicit Undefined Values:** A metric whose denominator vanishes returns
//!   `AnalyticsError::DivisionByZero`. The report layer turns those into
//!   `MetricOutcome::Undefined` entries; the core never swallows them.
//!
//! ## Public API
//!
//! - `align`: pads the shorter of two sequences with trailing negatives.
//! - `confusion_counts`, `classify` and the per-position indicator functions.
//! - `ConfusionMetrics`: one method per metric, plus `evaluate` by `Metric`.
//! - `Metric`: the metric catalogue and its alias table.
//! - `ClassificationReport`: every metric for one pair, ready for rendering.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod alignment;
pub mod confusion;
pub mod engine;
pub mod error;
pub mod metric;
pub mod outcome;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use alignment::align;
pub use confusion::{
    classify, confusion_counts, false_negatives, false_positives, indicators, true_negatives,
    true_positives,
};
pub use engine::{ConfusionMetrics, DEFAULT_BETA};
pub use error::AnalyticsError;
pub use metric::{Metric, Section};
pub use outcome::MetricOutcome;
pub use report::{ClassificationReport, MetricEntry, REPORT_ORDER};
