//! csvlog Core
//!
//! Small polymorphic loggers with a shared line format.
//! This crate provides the core functionality that can be used from any environment
//! (Node.js via napi-rs, Python via PyO3, native Rust).
//!
//! ## Sinks
//!
//! Every sink implements [`Logger`] (`clear`, `log`, `error`):
//! - [`ConsoleLogger`] writes bare lines to stdout, escaped errors to stderr
//! - [`FileLogger`] appends `<timestamp>;<user>;<message>` rows to a file
//! - [`NoOpLogger`] discards everything
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use csvlog_core::{FileLogger, Logger, FixedContext};
//!
//! # async fn demo() -> csvlog_core::LoggerResult<()> {
//! let ctx = Arc::new(FixedContext::new("alice", "/srv/app"));
//! let logger = FileLogger::with_context(None, ctx)?; // /srv/app/alice-log.csv
//! logger.clear().await?;
//! logger.log(&["deployed", "v1.2.0"]).await?;
//! logger.error(&["rollback failed:\nexit 1"]).await?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod logging;
pub mod config;

pub use context::{LogContext, SharedContext, EnvContext, FixedContext};

pub use logging::{
    Logger, LoggerError, LoggerResult, BoxedLogger, SharedLogger,
    Formatter, LoggerOptions, DELIMITER, HEADER,
    ConsoleLogger, FileLogger, NoOpLogger,
};

pub use config::{ConfigFile, ConfigError, ConfigLevel, FileConfigProvider, FileLoggerSettings};
