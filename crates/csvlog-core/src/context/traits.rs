//! Execution context abstraction

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Source of the ambient facts a logger needs from its environment
///
/// Implementations:
/// - `EnvContext`: reads the process environment
/// - `FixedContext`: fixed values for tests and embedding
///
/// Loggers take the context at construction time, so nothing inside the
/// crate reads the process environment directly.
pub trait LogContext: Send + Sync {
    /// Identity of the user on whose behalf lines are written
    fn user(&self) -> String;

    /// Directory used to resolve the default log file location
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Timestamp for the next prefix
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Type alias for an Arc-wrapped context
pub type SharedContext = Arc<dyn LogContext>;
