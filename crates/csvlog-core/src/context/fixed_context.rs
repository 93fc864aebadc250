//! Fixed context

use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::traits::LogContext;

/// Context with caller-supplied values
///
/// Useful for deterministic tests, or for hosts that know the user and
/// working directory better than the process environment does (an editor
/// extension, a service running under a shared account).
///
/// # Example
///
/// ```
/// use csvlog_core::context::{LogContext, FixedContext};
///
/// let ctx = FixedContext::new("alice", "/srv/app");
/// assert_eq!(ctx.user(), "alice");
/// assert_eq!(ctx.current_dir().unwrap(), std::path::PathBuf::from("/srv/app"));
/// ```
#[derive(Debug, Clone)]
pub struct FixedContext {
    user: String,
    current_dir: PathBuf,
    now: Option<DateTime<Utc>>,
}

impl FixedContext {
    /// Create a context with a fixed user and working directory
    pub fn new(user: impl Into<String>, current_dir: impl Into<PathBuf>) -> Self {
        Self {
            user: user.into(),
            current_dir: current_dir.into(),
            now: None,
        }
    }

    /// Pin the clock to a single instant
    pub fn with_time(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }
}

impl LogContext for FixedContext {
    fn user(&self) -> String {
        self.user.clone()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}
