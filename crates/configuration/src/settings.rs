use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// The most fraction digits a table report will print.
pub const MAX_DECIMALS: usize = 12;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)] // Every section may be omitted from the toml.
pub struct Config {
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

/// How metric reports are computed and rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// The F-beta weight. 1.0 gives the F1 score; the default favours precision.
    pub beta: f64,
    /// Fraction digits printed for each metric in table output.
    pub decimals: usize,
    pub format: OutputFormat,
    /// Print the input sequences above the metric table.
    pub show_sequences: bool,
}

/// Where and how verbosely the binary logs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub level: String,
    /// Also write logs to this file when set.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

// --- Default Implementations ---

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            beta: 0.5,
            decimals: 2,
            format: OutputFormat::Table,
            show_sequences: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Checks the values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.report.validate()?;
        self.logging.validate()
    }
}

impl ReportSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "report.beta must be a finite, non-negative number, got {}",
                self.beta
            )));
        }
        // The F-beta weight is beta squared.
        if !(self.beta * self.beta).is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "report.beta is too large, got {}",
                self.beta
            )));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::ValidationError(format!(
                "report.decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}

impl LoggingSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        tracing_subscriber::EnvFilter::try_new(&self.level).map_err(|e| {
            ConfigError::ValidationError(format!("logging.level '{}' is invalid: {e}", self.level))
        })?;
        Ok(())
    }
}
