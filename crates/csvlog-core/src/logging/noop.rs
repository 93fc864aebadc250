//! No-op logger implementation

use async_trait::async_trait;

use super::traits::{Logger, LoggerResult};

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Logger for NoOpLogger {
    fn name(&self) -> &str {
        "noop"
    }

    async fn clear(&self) -> LoggerResult<()> {
        Ok(())
    }

    async fn log(&self, _parts: &[&str]) -> LoggerResult<()> {
        Ok(())
    }

    async fn error(&self, _parts: &[&str]) -> LoggerResult<()> {
        Ok(())
    }
}
