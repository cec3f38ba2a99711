use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),
}
