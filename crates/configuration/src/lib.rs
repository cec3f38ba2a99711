use crate::error::ConfigError;
use std::path::Path;

pub mod error;
pub mod settings;

pub use settings::{Config, LoggingSettings, OutputFormat, ReportSettings, MAX_DECIMALS};

/// Base name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "binmetrics";

/// Prefix of environment variables that override the file, e.g. `BINMETRICS__REPORT__BETA`.
pub const ENV_PREFIX: &str = "BINMETRICS";

/// Loads the application configuration.
///
/// Sources, later ones winning: built-in defaults, the configuration file, and
/// `BINMETRICS__*` environment variables. With `path` the file must exist;
/// without it an optional `binmetrics.toml` in the working directory is used.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) if !path.is_file() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_apply_to_missing_sections() {
        let file = write_config("[report]\nbeta = 2.0\n");
        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.report.beta, 2.0);
        assert_eq!(config.report.decimals, 2);
        assert_eq!(config.report.format, OutputFormat::Table);
        assert!(config.report.show_sequences);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn reads_every_field() {
        let file = write_config(
            r#"
[report]
beta = 1.0
decimals = 4
format = "json"
show_sequences = false

[logging]
level = "debug"
file = "metrics.log"
"#,
        );
        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.report.decimals, 4);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(!config.report.show_sequences);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file.as_deref(), Some(Path::new("metrics.log")));
    }

    #[test]
    fn rejects_negative_beta() {
        let file = write_config("[report]\nbeta = -1.0\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn rejects_beta_whose_square_overflows() {
        let file = write_config("[report]\nbeta = 1e200\n");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::ValidationError(_))
        ));

        let settings = ReportSettings {
            beta: 1e100,
            ..ReportSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_excessive_decimals() {
        let file = write_config("[report]\ndecimals = 40\n");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_unknown_format() {
        let file = write_config("[report]\nformat = \"xml\"\n");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::LoadError(_))
        ));
    }

    #[test]
    fn explicit_path_must_exist() {
        let missing = Path::new("definitely/not/here/binmetrics.toml");
        match load_config(Some(missing)) {
            Err(ConfigError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
