//! Node.js bindings for csvlog via napi-rs

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::sync::Arc;

use csvlog_core::logging::{
    Logger,
    DELIMITER,
    ConsoleLogger as CoreConsoleLogger,
    FileLogger as CoreFileLogger,
    format_error_message as core_format_error_message,
};
use csvlog_core::config::FileConfigProvider as CoreFileConfigProvider;
use csvlog_core::context::{EnvContext, SharedContext};

fn to_napi_error(e: impl std::fmt::Display) -> Error {
    Error::from_reason(e.to_string())
}

fn env_context() -> SharedContext {
    Arc::new(EnvContext::new())
}

fn as_parts(parts: &[String]) -> Vec<&str> {
    parts.iter().map(String::as_str).collect()
}

/// Join parts with a space and quote/escape the result onto one line
#[napi]
pub fn format_error_message(parts: Vec<String>) -> String {
    core_format_error_message(&as_parts(&parts))
}

// ============================================================================
// ConsoleLogger
// ============================================================================

#[napi]
pub struct ConsoleLogger {
    inner: Arc<CoreConsoleLogger>,
}

#[napi]
impl ConsoleLogger {
    #[napi(constructor)]
    pub fn new() -> Self {
        Self { inner: Arc::new(CoreConsoleLogger::new()) }
    }

    #[napi(getter)]
    pub fn delimiter(&self) -> String { DELIMITER.to_string() }

    #[napi(getter)]
    pub fn prefix(&self) -> String { self.inner.formatter().prefix() }

    #[napi]
    pub fn format(&self, parts: Vec<String>) -> String {
        self.inner.formatter().format(&as_parts(&parts))
    }

    #[napi]
    pub async fn clear(&self) -> Result<()> {
        self.inner.clear().await.map_err(to_napi_error)
    }

    #[napi]
    pub async fn log(&self, parts: Vec<String>) -> Result<()> {
        self.inner.log(&as_parts(&parts)).await.map_err(to_napi_error)
    }

    #[napi]
    pub async fn error(&self, parts: Vec<String>) -> Result<()> {
        self.inner.error(&as_parts(&parts)).await.map_err(to_napi_error)
    }
}

// ============================================================================
// FileLogger
// ============================================================================

/// Appends `<timestamp>;<user>;<message>` rows to a file
///
/// Defaults to `<cwd>/<user>-log.csv` when no path is given.
#[napi]
pub struct FileLogger {
    inner: Arc<CoreFileLogger>,
}

#[napi]
impl FileLogger {
    #[napi(constructor)]
    pub fn new(path: Option<String>) -> Result<Self> {
        let inner = match path {
            Some(p) => CoreFileLogger::with_path(p),
            None => CoreFileLogger::with_context(None, env_context()).map_err(to_napi_error)?,
        };
        Ok(Self { inner: Arc::new(inner) })
    }

    /// Build from a config file; falls back to the default path when none is configured
    #[napi(factory)]
    pub fn from_config(config: &FileConfigProvider) -> Result<Self> {
        let file = config.inner.load().map_err(to_napi_error)?;
        let inner = CoreFileLogger::from_config(&file, env_context()).map_err(to_napi_error)?;
        Ok(Self { inner: Arc::new(inner) })
    }

    #[napi(getter)]
    pub fn delimiter(&self) -> String { DELIMITER.to_string() }

    /// `<cwd>/<user>-log.csv`
    #[napi(getter)]
    pub fn default_path(&self) -> Result<String> {
        let path = CoreFileLogger::default_path(&env_context()).map_err(to_napi_error)?;
        Ok(path.to_string_lossy().into_owned())
    }

    #[napi(getter, js_name = "path")]
    pub fn get_path(&self) -> String {
        self.inner.path().to_string_lossy().into_owned()
    }

    #[napi(setter, js_name = "path")]
    pub fn set_path(&self, value: String) {
        self.inner.set_path(value);
    }

    #[napi(getter)]
    pub fn prefix(&self) -> String { self.inner.formatter().prefix() }

    #[napi]
    pub fn format(&self, parts: Vec<String>) -> String {
        self.inner.formatter().format(&as_parts(&parts))
    }

    #[napi]
    pub async fn clear(&self) -> Result<()> {
        self.inner.clear().await.map_err(to_napi_error)
    }

    #[napi]
    pub async fn log(&self, parts: Vec<String>) -> Result<()> {
        self.inner.log(&as_parts(&parts)).await.map_err(to_napi_error)
    }

    #[napi]
    pub async fn error(&self, parts: Vec<String>) -> Result<()> {
        self.inner.error(&as_parts(&parts)).await.map_err(to_napi_error)
    }
}

// ============================================================================
// FileConfigProvider
// ============================================================================

/// YAML config holding the file logger's destination
#[napi]
pub struct FileConfigProvider {
    inner: Arc<CoreFileConfigProvider>,
}

#[napi]
impl FileConfigProvider {
    #[napi(factory)]
    pub fn user() -> Self {
        Self { inner: Arc::new(CoreFileConfigProvider::user()) }
    }

    #[napi(factory)]
    pub fn workspace(workspace_root: String) -> Self {
        Self { inner: Arc::new(CoreFileConfigProvider::workspace(workspace_root)) }
    }

    #[napi(getter)]
    pub fn path(&self) -> String {
        self.inner.path().to_string_lossy().to_string()
    }

    #[napi(getter)]
    pub fn level(&self) -> String {
        self.inner.level().as_str().to_string()
    }

    #[napi]
    pub fn exists(&self) -> bool {
        self.inner.exists()
    }

    #[napi]
    pub fn get_file_path(&self) -> Result<Option<String>> {
        let config = self.inner.load().map_err(to_napi_error)?;
        Ok(config.file.path.map(|p| p.to_string_lossy().into_owned()))
    }

    #[napi]
    pub fn set_file_path(&self, path: Option<String>) -> Result<()> {
        self.inner.set_file_path(path.map(Into::into)).map_err(to_napi_error)
    }
}
