//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the license selector tools:
//! a compact stderr layer, an optional rolling file layer (plain or JSON), and an
//! `EnvFilter` that honours `RUST_LOG` unless explicit directives are given.
//!
//! ## Example
//!
//! ```rust
//! # use cstudio_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("licsel")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::{LoggerBuilder, NoFile, NoName, WithFile, WithName};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use cstudio_domain::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed logging system.
///
/// Holds the background writer guard of the file layer, if any.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    pub(crate) guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Installs a subscriber described by a [`LogConfig`] section.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an unknown level name, otherwise as
    /// [`LoggerBuilder::init`].
    pub fn from_config(name: &str, config: &LogConfig) -> Result<Self, LoggerError> {
        let level = parse_level(&config.level)?;
        let mut builder = Self::builder().name(name).level(level);
        if let Some(directives) = &config.filter {
            builder = builder.env_filter(directives.as_str());
        }
        match &config.path {
            Some(path) => builder.path(path).json(config.json).init(),
            None => builder.init(),
        }
    }

    /// Whether a file layer (and its writer thread) is active.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers");
        }
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse().map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}'").into(),
        context: Some("expected one of off, error, warn, info, debug, trace".into()),
    })
}
