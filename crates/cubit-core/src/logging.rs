//! Log subscriber setup for binaries and tests that use `cubit-core`.
//!
//! The library itself only emits `tracing` events: shape changes at `debug`,
//! bulk import/export at `trace`, and [`Tensor::show`](crate::Tensor::show)
//! output at `info`. Applications install a subscriber once at startup.
//!
//! # Example
//!
//! ```no_run
//! use cubit_core::logging::{init_logging, LoggingConfig};
//!
//! init_logging(LoggingConfig::default()).unwrap();
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (e.g., `RUST_LOG=cubit_core=debug`)
//! - `CUBIT_LOG_FORMAT`: output format (`pretty`, `compact` or `json`, default: `pretty`)

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Subscriber output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// One line per event
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Pretty`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive (e.g., "cubit_core=debug,info")
    pub filter: String,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_file: bool,
    pub with_line_number: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let format = std::env::var("CUBIT_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(LogFormat::Pretty);
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "cubit_core=info,warn".to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: true,
            with_file: false,
            with_line_number: false,
        }
    }
}

/// Error raised while installing the subscriber
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(String),

    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Install a global `tracing` subscriber
///
/// Fails if the filter directive does not parse or a global subscriber is
/// already installed.
#[cfg(feature = "logging")]
pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_new(&config.filter).map_err(|err| LoggingError::Filter(err.to_string()))?;
    let installed = |err: tracing_subscriber::util::TryInitError| LoggingError::Init(err.to_string());

    match config.format {
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .map_err(installed)?;
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .map_err(installed)?;
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .map_err(installed)?;
        }
    }

    Ok(())
}

/// No-op when the `logging` feature is disabled
#[cfg(not(feature = "logging"))]
pub fn init_logging(_config: LoggingConfig) -> Result<(), LoggingError> {
    Ok(())
}
