use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary classification label.
///
/// The only way to obtain a `Label` from raw data is through a validated
/// conversion, so a `&[Label]` is always a well-formed binary sequence.
///
/// The negative class is the default: padding and "nothing detected" are both
/// modelled as `Label::Negative`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Label {
    #[default]
    Negative,
    Positive,
}

impl Label {
    /// Returns `true` for the positive class.
    pub fn is_positive(&self) -> bool {
        matches!(self, Label::Positive)
    }

    /// The numeric value of the label, `0` or `1`.
    pub fn value(&self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive { Label::Positive } else { Label::Negative }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.value()
    }
}

impl TryFrom<i64> for Label {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(CoreError::InvalidValue(other.to_string())),
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Label::try_from(i64::from(value))
    }
}

impl FromStr for Label {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Label::Negative),
            "1" => Ok(Label::Positive),
            other => Err(CoreError::InvalidValue(other.to_string())),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The confusion-matrix cell a single (ground truth, predicted) pair falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TruePositive,
    FalsePositive,
    TrueNegative,
    FalseNegative,
}

impl Outcome {
    /// Classifies one aligned position.
    pub fn classify(ground_truth: Label, predicted: Label) -> Self {
        match (ground_truth, predicted) {
            (Label::Positive, Label::Positive) => Outcome::TruePositive,
            (Label::Positive, Label::Negative) => Outcome::FalseNegative,
            (Label::Negative, Label::Positive) => Outcome::FalsePositive,
            (Label::Negative, Label::Negative) => Outcome::TrueNegative,
        }
    }

    /// Short abbreviation used in tables.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Outcome::TruePositive => "TP",
            Outcome::FalsePositive => "FP",
            Outcome::TrueNegative => "TN",
            Outcome::FalseNegative => "FN",
        }
    }
}
