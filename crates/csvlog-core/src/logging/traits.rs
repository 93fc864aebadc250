//! Logger trait definition

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while writing log output
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to write log file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Console write failed: {0}")]
    Console(#[source] io::Error),

    #[error("Cannot resolve working directory: {0}")]
    WorkingDirectory(#[source] io::Error),
}

impl LoggerError {
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;

/// The capability set shared by every sink
///
/// Implementations:
/// - `ConsoleLogger`: stdout/stderr, no prefix
/// - `FileLogger`: `;`-delimited file with date and user prefix
/// - `NoOpLogger`: discards everything
///
/// Each call completes when its write has completed. Failures are
/// returned to the caller untouched.
#[async_trait]
pub trait Logger: Send + Sync {
    /// Human-readable name of this sink
    fn name(&self) -> &str;

    /// Reset the destination
    async fn clear(&self) -> LoggerResult<()>;

    /// Write one line made of `parts` joined by a space
    async fn log(&self, parts: &[&str]) -> LoggerResult<()>;

    /// Write one line carrying `parts` as an escaped, single-line message
    async fn error(&self, parts: &[&str]) -> LoggerResult<()>;
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Log any `Display` values, converting each to text first.
///
/// Expands to a future; `.await` it.
///
/// ```
/// # async fn demo(logger: &csvlog_core::ConsoleLogger) -> csvlog_core::LoggerResult<()> {
/// csvlog_core::log_parts!(logger, "retry", 3, "of", 5).await?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! log_parts {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        async {
            let owned: ::std::vec::Vec<::std::string::String> =
                ::std::vec![$(::std::string::ToString::to_string(&$part)),*];
            let parts: ::std::vec::Vec<&str> = owned.iter().map(|s| s.as_str()).collect();
            $crate::logging::Logger::log(&*$logger, &parts).await
        }
    };
}

/// Like `log_parts!`, for `Logger::error`.
#[macro_export]
macro_rules! error_parts {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        async {
            let owned: ::std::vec::Vec<::std::string::String> =
                ::std::vec![$(::std::string::ToString::to_string(&$part)),*];
            let parts: ::std::vec::Vec<&str> = owned.iter().map(|s| s.as_str()).collect();
            $crate::logging::Logger::error(&*$logger, &parts).await
        }
    };
}
