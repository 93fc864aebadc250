//! Process environment context

use std::env;
use std::io;
use std::path::PathBuf;

use super::traits::LogContext;

/// Variables consulted, in order, for the user name
const USER_VARS: &[&str] = &["USER", "USERNAME"];

/// Fallback when no user variable is set
pub const UNKNOWN_USER: &str = "unknown";

/// Context backed by the running process
///
/// The user comes from `USER` (Unix) or `USERNAME` (Windows), and the
/// working directory from the process. Both are read on every call, so a
/// `chdir` after construction is visible.
///
/// # Example
///
/// ```
/// use csvlog_core::context::{LogContext, EnvContext};
///
/// let ctx = EnvContext::new();
/// assert!(!ctx.user().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct EnvContext {
    _private: (),
}

impl EnvContext {
    /// Create a new process environment context
    pub fn new() -> Self {
        Self { _private: () }
    }
}

/// First non-empty value among `USER_VARS`, or `UNKNOWN_USER`
fn resolve_user(lookup: impl Fn(&str) -> Option<String>) -> String {
    USER_VARS
        .iter()
        .filter_map(|var| lookup(*var))
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

/// Read a variable, keeping non-UTF-8 values via lossy conversion
fn env_var_lossy(var: &str) -> Option<String> {
    env::var_os(var).map(|value| value.to_string_lossy().into_owned())
}

impl LogContext for EnvContext {
    fn user(&self) -> String {
        resolve_user(env_var_lossy)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_context_user_never_empty() {
        let ctx = EnvContext::new();
        assert!(!ctx.user().is_empty());
    }

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_resolve_user_prefers_user() {
        let lookup = vars(&[("USER", "alice"), ("USERNAME", "ALICE-PC")]);
        assert_eq!(resolve_user(lookup), "alice");
    }

    #[test]
    fn test_resolve_user_skips_empty_user() {
        let lookup = vars(&[("USER", ""), ("USERNAME", "bob")]);
        assert_eq!(resolve_user(lookup), "bob");

        let lookup = vars(&[("USERNAME", "carol")]);
        assert_eq!(resolve_user(lookup), "carol");
    }

    #[test]
    fn test_resolve_user_unknown_fallback() {
        assert_eq!(resolve_user(vars(&[])), UNKNOWN_USER);
        assert_eq!(resolve_user(vars(&[("USER", ""), ("USERNAME", "")])), "unknown");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_user_is_kept() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("CSVLOG_TEST_RAW_USER", OsStr::from_bytes(b"j\xF6rg"));
        assert_eq!(env_var_lossy("CSVLOG_TEST_RAW_USER").as_deref(), Some("j\u{FFFD}rg"));
        env::remove_var("CSVLOG_TEST_RAW_USER");
        assert_eq!(env_var_lossy("CSVLOG_TEST_RAW_USER"), None);
    }

    #[test]
    fn test_env_context_current_dir() {
        let ctx = EnvContext::new();
        assert_eq!(ctx.current_dir().unwrap(), env::current_dir().unwrap());
    }

    #[test]
    fn test_env_context_now_is_recent() {
        let ctx = EnvContext::new();
        let before = chrono::Utc::now();
        let now = ctx.now();
        assert!(now >= before);
    }
}
