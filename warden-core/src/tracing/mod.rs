//! Tracing integration for structured logging
//!
//! Both binaries log through the `tracing` macros. [`init_tracing`] installs a
//! `fmt` subscriber that writes one line per event (local timestamp, target,
//! level, message and fields) to the rotating log file in the configuration
//! directory.

mod rotating;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use rotating::RotatingFileWriter;

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Timestamp layout of every log line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Crates whose events pass the configured level; everything else is `warn`
const LOGGED_TARGETS: [&str; 3] = ["warden", "warden_core", "warden_configure"];

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// Failed to open the log file
    #[error("Failed to open log file {path}: {source}")]
    FileCreationFailed {
        /// Log file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Tracing log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Error level - only errors
    Error,
    /// Warn level - errors and warnings
    Warn,
    /// Info level - errors, warnings, and info (default)
    #[default]
    Info,
    /// Debug level - all above plus debug messages
    Debug,
    /// Trace level - all messages including trace
    Trace,
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Log level for the Warden crates
    pub level: TracingLevel,
    /// Path to the log file
    pub path: PathBuf,
    /// Size at which the file is rotated (0 disables rotation)
    pub max_bytes: u64,
    /// Number of rotated files kept
    pub backups: u32,
}

impl TracingConfig {
    /// Log file output driven by the `logging.*` settings
    #[must_use]
    pub fn log_file(path: PathBuf, settings: &crate::config::LoggingSettings) -> Self {
        Self {
            level: settings.tracing_level(),
            path,
            max_bytes: settings.max_bytes,
            backups: settings.backups,
        }
    }

    /// Filter directives: the configured level for Warden crates, `warn` for
    /// everything else
    #[must_use]
    pub fn directives(&self) -> String {
        let mut directives = vec!["warn".to_string()];
        directives.extend(
            LOGGED_TARGETS
                .iter()
                .map(|target| format!("{target}={}", self.level)),
        );
        directives.join(",")
    }
}

/// Initializes the tracing subscriber with the given configuration
///
/// This function should be called once at startup. Subsequent calls return
/// [`TracingError::AlreadyInitialized`].
///
/// # Errors
///
/// Returns an error if tracing was already initialized or the log file cannot
/// be opened.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_new(config.directives())
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    let writer = RotatingFileWriter::open(config.path.clone(), config.max_bytes, config.backups)
        .map_err(|source| TracingError::FileCreationFailed {
            path: config.path.clone(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    tracing::debug!(level = %config.level, "Tracing initialized");
    Ok(())
}

/// Standard span names for Warden operations
pub mod span_names {
    /// Configuration load span
    pub const CONFIG_LOAD: &str = "config.load";
    /// Configuration save span
    pub const CONFIG_SAVE: &str = "config.save";
    /// Per-host check span
    pub const HOST_CHECK: &str = "host.check";
    /// Warning mail span
    pub const MAIL_SEND: &str = "mail.send";
}
