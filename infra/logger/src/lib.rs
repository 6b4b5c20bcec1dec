//! # Logger
//!
//! One place to install the global `tracing` subscriber for the site binaries.
//! Console output is compact and coloured; file output goes through a rolling,
//! non-blocking appender and can be written as JSON lines.
//!
//! `RUST_LOG` always wins over the programmatic level. Use [`LoggerBuilder::env_filter`]
//! to set a default directive set (e.g. `"foh_kernel=debug,dioxus=warn"`).
//!
//! ## Example
//!
//! ```rust
//! # use foh_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("foh-site")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct LoggerSettings {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFile {}

/// Typed builder for the global subscriber. A name is mandatory; file-only knobs
/// become available after [`LoggerBuilder::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    settings: LoggerSettings,
    name: N,
    output: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), output: PhantomData }
    }
}

impl LoggerBuilder<Named, WithFile> {
    /// How many rotated files to keep around.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// Writes file output as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }
}

impl LoggerBuilder<Named, ConsoleOnly> {
    /// Installs with an optional log directory, the way a config file describes it.
    /// `json` only applies to file output.
    ///
    /// # Errors
    /// Same as [`LoggerBuilder::init`].
    pub fn init_with_dir(self, dir: Option<&Path>, json: bool) -> Result<Logger, LoggerError> {
        match dir {
            Some(dir) => self.path(dir).json(json).init(),
            None => self.init(),
        }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    /// Minimum level emitted when `RUST_LOG` is not set.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Parses a textual level (`"info"`, `"DEBUG"`, `"off"`, ...).
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] when the name is not a tracing level.
    pub fn level_name(self, level: &str) -> Result<Self, LoggerError> {
        let parsed = level.trim().parse::<LevelFilter>().map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Unknown log level '{level}': {e}").into(),
                context: None,
            }
        })?;
        Ok(self.level(parsed))
    }

    /// Default filter directives, still overridable through `RUST_LOG`.
    /// An invalid directive string makes [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Directory that receives the rolling log files.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        let mut settings = self.settings;
        settings.directory = Some(path.into());
        LoggerBuilder { settings, name: self.name, output: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's [`WorkerGuard`]; keep it alive
    /// until shutdown or buffered lines are lost.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   a bad filter, or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let LoggerBuilder { settings, name: Named(name), .. } = self;
        validate(&settings, &name)?;

        let filter = build_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &settings.directory {
            Some(dir) => {
                let (file_layer, guard) = file_layer(&settings, &name, dir)?;
                layers.push(file_layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled. Turn on the console or set a log directory.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .context("Installing global subscriber")?;

        tracing::debug!(logger = %name, file = guard.is_some(), "Logger initialized");
        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new [`LoggerBuilder`].
    ///
    /// ```rust
    /// use foh_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder().name("foh-site").level(LevelFilter::DEBUG).init().unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: Unnamed, output: PhantomData }
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn file_layer(
    settings: &LoggerSettings,
    name: &str,
    dir: &Path,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    std::fs::create_dir_all(dir)
        .context(format!("Failed to create log directory: {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(settings.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(dir)
        .context("Building rolling file appender")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let base = layer().with_writer(writer).with_ansi(false);
    let boxed = if settings.json { base.json().boxed() } else { base.boxed() };

    Ok((boxed, guard))
}

fn validate(settings: &LoggerSettings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_filter(settings: &LoggerSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}
