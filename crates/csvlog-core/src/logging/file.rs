//! Delimited-file logger
//!
//! Appends `<timestamp>;<user>;<message>` rows to a text file. Each call
//! opens the file, writes one line and closes it again, so other programs
//! may rotate or read the file between calls.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::format::{Formatter, LoggerOptions, HEADER};
use super::traits::{Logger, LoggerError, LoggerResult};
use crate::config::ConfigFile;
use crate::context::{EnvContext, SharedContext};

/// File name suffix used for the default path
const DEFAULT_FILE_SUFFIX: &str = "-log.csv";

/// A logger that appends rows to a `;`-delimited file
///
/// Every row carries a timestamp and user prefix. The destination can be
/// changed at any time with `set_path`; an operation already in flight
/// keeps the path it started with.
///
/// # Example
///
/// ```no_run
/// use csvlog_core::logging::{FileLogger, Logger};
///
/// # async fn demo() -> csvlog_core::LoggerResult<()> {
/// let logger = FileLogger::with_path("/tmp/app-log.csv");
/// logger.clear().await?;
/// logger.log(&["hello", "world"]).await?;
/// # Ok(())
/// # }
/// ```
pub struct FileLogger {
    formatter: Formatter,
    path: RwLock<PathBuf>,
    write_lock: Mutex<()>,
}

impl FileLogger {
    /// Create a file logger at `<cwd>/<user>-log.csv`, using the process environment
    pub fn new() -> LoggerResult<Self> {
        Self::with_context(None, Arc::new(EnvContext::new()))
    }

    /// Create a file logger with an explicit path, using the process environment
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::build(path.into(), Arc::new(EnvContext::new()))
    }

    /// Create a file logger with an injected context
    ///
    /// Without a path the default location is derived from the context.
    pub fn with_context(path: Option<PathBuf>, context: SharedContext) -> LoggerResult<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path(&context)?,
        };
        Ok(Self::build(path, context))
    }

    /// Create a file logger from a loaded config file
    pub fn from_config(config: &ConfigFile, context: SharedContext) -> LoggerResult<Self> {
        Self::with_context(config.file.path.clone(), context)
    }

    /// `<current dir>/<user>-log.csv` for the given context
    pub fn default_path(context: &SharedContext) -> LoggerResult<PathBuf> {
        let dir = context.current_dir().map_err(LoggerError::WorkingDirectory)?;
        Ok(dir.join(format!("{}{}", context.user(), DEFAULT_FILE_SUFFIX)))
    }

    fn build(path: PathBuf, context: SharedContext) -> Self {
        Self {
            formatter: Formatter::new(LoggerOptions::default(), context),
            path: RwLock::new(path),
            write_lock: Mutex::new(()),
        }
    }

    /// Current destination
    pub fn path(&self) -> PathBuf {
        self.path.read().clone()
    }

    /// Change the destination for subsequent operations
    pub fn set_path(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!(path = %path.display(), "file logger destination changed");
        *self.path.write() = path;
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    async fn append_line(&self, path: &Path, line: String) -> LoggerResult<()> {
        let mut row = line;
        row.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| LoggerError::file(path, e))?;
        file.write_all(row.as_bytes())
            .await
            .map_err(|e| LoggerError::file(path, e))?;
        file.flush().await.map_err(|e| LoggerError::file(path, e))?;

        tracing::trace!(path = %path.display(), bytes = row.len(), "appended log row");
        Ok(())
    }
}

impl std::fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileLogger")
            .field("path", &self.path())
            .field("formatter", &self.formatter)
            .finish()
    }
}

#[async_trait]
impl Logger for FileLogger {
    fn name(&self) -> &str {
        "file"
    }

    async fn clear(&self) -> LoggerResult<()> {
        let path = self.path();
        let header = format!("{}\n", HEADER.as_str());

        let _guard = self.write_lock.lock().await;
        tokio::fs::write(&path, header)
            .await
            .map_err(|e| LoggerError::file(&path, e))?;

        tracing::debug!(path = %path.display(), "log file reset to header");
        Ok(())
    }

    async fn log(&self, parts: &[&str]) -> LoggerResult<()> {
        let path = self.path();
        let line = self.formatter.format(parts);
        self.append_line(&path, line).await
    }

    async fn error(&self, parts: &[&str]) -> LoggerResult<()> {
        let message = self.formatter.format_error_message(parts);
        self.log(&[&message]).await
    }
}
