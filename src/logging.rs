use anyhow::{Context, Result};
use configuration::LoggingSettings;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber: stderr always, plus a log file when configured.
///
/// `RUST_LOG` takes precedence over `logging.level`. The returned guards flush
/// the non-blocking writers and must live until the program exits.
pub fn init_tracing(settings: &LoggingSettings) -> Result<Vec<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("Invalid log level '{}'", settings.level))?,
    };

    let mut guards = Vec::new();

    let (stderr_writer, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());
    guards.push(stderr_guard);

    let file_layer = match &settings.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("logging.file {path:?} has no file name"))?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (file_writer, file_guard) = tracing_appender::non_blocking(appender);
            guards.push(file_guard);
            Some(fmt::layer().with_writer(file_writer).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(stderr_writer))
        .with(file_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(guards)
}
