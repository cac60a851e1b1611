//! # Logger
//!
//! Installs the process-wide tracing subscriber of a bridge host from its [`LoggingConfig`].
//!
//! Output goes to the console, to daily-rotated files under `directory`, or both. File output
//! is written by a non-blocking worker whose guard lives in the returned [`Logger`].
//! `env_filter` directives (e.g. `"vbridge_view_group=trace"`) override the base `level`;
//! without them `RUST_LOG` is honoured.
//!
//! ## Example
//!
//! ```rust
//! use vbridge_domain::config::LoggingConfig;
//! use vbridge_logger::Logger;
//!
//! let config = LoggingConfig { level: "debug".to_owned(), ..LoggingConfig::default() };
//! let _logger = Logger::from_config(&config).unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};
use vbridge_domain::config::LoggingConfig;

const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Handle to the installed subscriber.
///
/// Keep it alive until shutdown: dropping it stops the file writer and flushes its buffer.
#[must_use = "Dropping this handle stops background file logging."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Validates `config` and installs the global subscriber it describes.
    ///
    /// Nothing is installed when validation fails.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, `max_files == 0`, an unknown
    ///   level, malformed `env_filter` directives, or when neither console nor file output is on.
    /// * [`LoggerError::Internal`] if the log directory cannot be created.
    /// * [`LoggerError::Appender`] if the rolling file appender cannot be opened.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn from_config(config: &LoggingConfig) -> Result<Self, LoggerError> {
        let filter = resolve_filter(config)?;

        let mut layers: Vec<BoxedLayer> = Vec::new();
        if config.console {
            layers.push(fmt::layer().compact().boxed());
        }
        let guard = match &config.directory {
            Some(directory) => {
                let (layer, guard) = file_layer(config, directory)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        tracing::debug!(
            name = %config.name,
            console = config.console,
            directory = ?config.directory,
            json = config.json,
            "Logger installed"
        );
        Ok(Self { guard })
    }

    /// Whether file output is active (and its worker guard held).
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

/// Checks everything that can be checked before touching the filesystem or the global
/// dispatcher, and returns the filter to install.
fn resolve_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggerError> {
    if config.name.trim().is_empty() {
        return Err(invalid("logger name cannot be empty"));
    }
    if config.max_files == 0 {
        return Err(invalid("max_files must be greater than zero"));
    }
    if !config.console && config.directory.is_none() {
        return Err(invalid("no output enabled: set `console` or `directory`"));
    }

    let level = LevelFilter::from_str(config.level.trim())
        .map_err(|e| invalid(format!("unknown level '{}': {e}", config.level)))?;

    let builder = EnvFilter::builder().with_default_directive(level.into());
    match &config.env_filter {
        Some(directives) => builder
            .parse(directives)
            .map_err(|e| invalid(format!("malformed env_filter '{directives}': {e}"))),
        None => Ok(builder.from_env_lossy()),
    }
}

fn file_layer(
    config: &LoggingConfig,
    directory: &Path,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("creating log directory {}", directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(config.name.trim())
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(config.max_files)
        .build(directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if config.json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}
