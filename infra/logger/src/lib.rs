//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the `locus` binaries.
//!
//! Console output goes to **stderr** so that command output on stdout stays machine
//! readable. Optionally, events are also written to a rolling file through a non-blocking
//! worker. Either sink can emit JSON instead of the compact text format.
//!
//! `RUST_LOG` is honoured unless an explicit filter is given with
//! [`LoggerBuilder::env_filter`].
//!
//! ```rust
//! use locus_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("locus")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct LoggerConfig {
    name: String,
    console: bool,
    json: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    path: Option<PathBuf>,
    max_files: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            console: true,
            json: false,
            level: LevelFilter::INFO,
            env_filter: None,
            path: None,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

/// Builder state before [`LoggerBuilder::name`] is called.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once a name is set; only this state can [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct Named;

/// Configures the global subscriber. Obtain one from [`Logger::builder`].
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct LoggerBuilder<S = Unnamed> {
    config: LoggerConfig,
    state: PhantomData<S>,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger; also the prefix of rolling log files (`locus.2026-01-31.log`).
    pub fn name(mut self, name: impl Into<String>) -> LoggerBuilder<Named> {
        self.config.name = name.into();
        LoggerBuilder { config: self.config, state: PhantomData }
    }
}

impl<S> LoggerBuilder<S> {
    /// Minimum level when no filter directive says otherwise.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Explicit filter directives such as `locus_lookup=debug,reqwest=warn`.
    ///
    /// Takes precedence over `RUST_LOG`. An unparsable filter makes [`LoggerBuilder::init`] fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Writes human-readable events to stderr (on by default).
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Emits one JSON object per event on every enabled sink.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Also writes events to daily rolling files in `path`, which is created if needed.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    /// Number of rotated files to keep.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: dropping it stops the file worker.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, a bad
    ///   filter, or no enabled sink.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let config = self.config;
        validate(&config)?;
        let filter = env_filter(&config)?;

        let mut layers: Vec<BoxedLayer> = Vec::new();
        if config.console {
            let console = layer().with_writer(io::stderr);
            layers.push(if config.json { console.json().boxed() } else { console.compact().boxed() });
        }

        let guard = match &config.path {
            Some(path) => {
                fs::create_dir_all(path).context(format!("Creating {}", path.display()))?;
                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&config.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(config.max_files)
                    .build(path)?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if config.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "enable console output or set a log path".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(name = %config.name, file = guard.is_some(), "Logger initialised");

        Ok(Logger { guard })
    }
}

/// Handle to the installed subscriber.
#[must_use = "dropping the handle stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), state: PhantomData }
    }

    /// Whether events are also going to a log file.
    #[must_use]
    pub const fn writes_file(&self) -> bool {
        self.guard.is_some()
    }
}

fn validate(config: &LoggerConfig) -> Result<(), LoggerError> {
    if config.name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name cannot be empty".into(),
            context: None,
        });
    }
    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match &config.env_filter {
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
            message: e.to_string().into(),
            context: Some(directives.clone().into()),
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("locus-test");
        assert!(builder.config.console);
        assert!(!builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.max_files, DEFAULT_MAX_FILES);
        assert!(builder.config.path.is_none());
    }

    #[test]
    fn options_apply_in_any_state() {
        let builder = Logger::builder()
            .level(LevelFilter::WARN)
            .json(true)
            .path("/tmp/locus-logs")
            .name("locus-test")
            .env_filter("locus=trace")
            .max_files(3);

        assert_eq!(builder.config.level, LevelFilter::WARN);
        assert!(builder.config.json);
        assert_eq!(builder.config.max_files, 3);
        assert_eq!(builder.config.env_filter.as_deref(), Some("locus=trace"));
        assert_eq!(builder.config.path.as_deref(), Some(std::path::Path::new("/tmp/locus-logs")));
    }

    #[test]
    fn invalid_settings_are_rejected_before_install() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("locus-test").max_files(0).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("locus-test").env_filter("locus=loudest").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("locus-test").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
