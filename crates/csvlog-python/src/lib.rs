//! Python bindings for csvlog via PyO3

use pyo3::prelude::*;
use pyo3::exceptions::PyRuntimeError;
use pyo3::types::PyTuple;
use std::future::Future;
use std::sync::Arc;

use csvlog_core::logging::{
    Logger,
    DELIMITER,
    LoggerResult as CoreLoggerResult,
    ConsoleLogger as CoreConsoleLogger,
    FileLogger as CoreFileLogger,
    format_error_message as core_format_error_message,
};
use csvlog_core::config::FileConfigProvider as CoreFileConfigProvider;
use csvlog_core::context::{EnvContext, SharedContext};

fn to_py_error(e: impl std::fmt::Display) -> PyErr {
    PyRuntimeError::new_err(e.to_string())
}

fn env_context() -> SharedContext {
    Arc::new(EnvContext::new())
}

/// Run a logger future to completion on a fresh runtime
fn block_on<F>(future: F) -> PyResult<()>
where
    F: Future<Output = CoreLoggerResult<()>>,
{
    let rt = tokio::runtime::Runtime::new().map_err(to_py_error)?;
    rt.block_on(future).map_err(to_py_error)
}

/// Accept `log("a", 1, obj)` the way Python's print does: str() every argument
fn collect_parts(parts: &Bound<'_, PyTuple>) -> PyResult<Vec<String>> {
    parts.iter().map(|part| part.str()?.extract::<String>()).collect()
}

fn as_parts(parts: &[String]) -> Vec<&str> {
    parts.iter().map(String::as_str).collect()
}

#[pyfunction]
#[pyo3(signature = (*parts))]
fn format_error_message(parts: &Bound<'_, PyTuple>) -> PyResult<String> {
    let parts = collect_parts(parts)?;
    Ok(core_format_error_message(&as_parts(&parts)))
}

// ============================================================================
// ConsoleLogger
// ============================================================================

#[pyclass]
pub struct ConsoleLogger {
    inner: Arc<CoreConsoleLogger>,
}

#[pymethods]
impl ConsoleLogger {
    #[new]
    pub fn new() -> Self {
        Self { inner: Arc::new(CoreConsoleLogger::new()) }
    }

    #[getter]
    pub fn delimiter(&self) -> &'static str { DELIMITER }

    #[getter]
    pub fn prefix(&self) -> String { self.inner.formatter().prefix() }

    #[pyo3(signature = (*parts))]
    pub fn format(&self, parts: &Bound<'_, PyTuple>) -> PyResult<String> {
        let parts = collect_parts(parts)?;
        Ok(self.inner.formatter().format(&as_parts(&parts)))
    }

    pub fn clear(&self) -> PyResult<()> {
        block_on(self.inner.clear())
    }

    #[pyo3(signature = (*parts))]
    pub fn log(&self, parts: &Bound<'_, PyTuple>) -> PyResult<()> {
        let parts = collect_parts(parts)?;
        block_on(self.inner.log(&as_parts(&parts)))
    }

    #[pyo3(signature = (*parts))]
    pub fn error(&self, parts: &Bound<'_, PyTuple>) -> PyResult<()> {
        let parts = collect_parts(parts)?;
        block_on(self.inner.error(&as_parts(&parts)))
    }

    fn __repr__(&self) -> String { "ConsoleLogger()".to_string() }
}

// ============================================================================
// FileLogger
// ============================================================================

#[pyclass]
pub struct FileLogger {
    inner: Arc<CoreFileLogger>,
}

#[pymethods]
impl FileLogger {
    #[new]
    #[pyo3(signature = (path=None))]
    pub fn new(path: Option<String>) -> PyResult<Self> {
        let inner = match path {
            Some(p) => CoreFileLogger::with_path(p),
            None => CoreFileLogger::with_context(None, env_context()).map_err(to_py_error)?,
        };
        Ok(Self { inner: Arc::new(inner) })
    }

    /// Build from a config file; falls back to the default path when none is configured
    #[staticmethod]
    pub fn from_config(config: PyRef<'_, FileConfigProvider>) -> PyResult<Self> {
        let file = config.inner.load().map_err(to_py_error)?;
        let inner = CoreFileLogger::from_config(&file, env_context()).map_err(to_py_error)?;
        Ok(Self { inner: Arc::new(inner) })
    }

    /// `<cwd>/<user>-log.csv`
    #[getter]
    pub fn default_path(&self) -> PyResult<String> {
        let path = CoreFileLogger::default_path(&env_context()).map_err(to_py_error)?;
        Ok(path.to_string_lossy().into_owned())
    }

    #[getter]
    pub fn path(&self) -> String {
        self.inner.path().to_string_lossy().into_owned()
    }

    #[setter]
    pub fn set_path(&self, value: String) {
        self.inner.set_path(value);
    }

    #[getter]
    pub fn delimiter(&self) -> &'static str { DELIMITER }

    #[getter]
    pub fn prefix(&self) -> String { self.inner.formatter().prefix() }

    #[pyo3(signature = (*parts))]
    pub fn format(&self, parts: &Bound<'_, PyTuple>) -> PyResult<String> {
        let parts = collect_parts(parts)?;
        Ok(self.inner.formatter().format(&as_parts(&parts)))
    }

    pub fn clear(&self) -> PyResult<()> {
        block_on(self.inner.clear())
    }

    #[pyo3(signature = (*parts))]
    pub fn log(&self, parts: &Bound<'_, PyTuple>) -> PyResult<()> {
        let parts = collect_parts(parts)?;
        block_on(self.inner.log(&as_parts(&parts)))
    }

    #[pyo3(signature = (*parts))]
    pub fn error(&self, parts: &Bound<'_, PyTuple>) -> PyResult<()> {
        let parts = collect_parts(parts)?;
        block_on(self.inner.error(&as_parts(&parts)))
    }

    fn __repr__(&self) -> String {
        format!("FileLogger(path='{}')", self.inner.path().display())
    }
}

// ============================================================================
// FileConfigProvider
// ============================================================================

#[pyclass]
pub struct FileConfigProvider {
    inner: Arc<CoreFileConfigProvider>,
}

#[pymethods]
impl FileConfigProvider {
    #[staticmethod]
    pub fn user() -> Self {
        Self { inner: Arc::new(CoreFileConfigProvider::user()) }
    }

    #[staticmethod]
    pub fn workspace(workspace_root: String) -> Self {
        Self { inner: Arc::new(CoreFileConfigProvider::workspace(workspace_root)) }
    }

    #[getter]
    pub fn path(&self) -> String {
        self.inner.path().to_string_lossy().to_string()
    }

    #[getter]
    pub fn level(&self) -> &'static str {
        self.inner.level().as_str()
    }

    pub fn exists(&self) -> bool {
        self.inner.exists()
    }

    pub fn get_file_path(&self) -> PyResult<Option<String>> {
        let config = self.inner.load().map_err(to_py_error)?;
        Ok(config.file.path.map(|p| p.to_string_lossy().into_owned()))
    }

    #[pyo3(signature = (path=None))]
    pub fn set_file_path(&self, path: Option<String>) -> PyResult<()> {
        self.inner.set_file_path(path.map(Into::into)).map_err(to_py_error)
    }

    fn __repr__(&self) -> String {
        format!("FileConfigProvider(path='{}', level='{}')", self.inner.path().display(), self.inner.level().as_str())
    }
}

#[pymodule]
fn csvlog(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Logger Types
    m.add_class::<ConsoleLogger>()?;
    m.add_class::<FileLogger>()?;

    // Config Types
    m.add_class::<FileConfigProvider>()?;

    // Functions
    m.add_function(wrap_pyfunction!(format_error_message, m)?)?;

    Ok(())
}
