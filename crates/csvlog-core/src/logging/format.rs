//! Line formatting shared by every sink

use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;

use crate::context::SharedContext;

/// Field delimiter used by every logger
pub const DELIMITER: &str = ";";

/// Header row written by `FileLogger::clear`
pub static HEADER: Lazy<String> = Lazy::new(|| ["[DATE]", "[USER]", "[ACTION]"].join(DELIMITER));

/// Which prefix fields a logger writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Prepend an ISO-8601 timestamp
    pub log_date: bool,
    /// Prepend the current user
    pub log_user: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl LoggerOptions {
    pub const fn new(log_date: bool, log_user: bool) -> Self {
        Self { log_date, log_user }
    }

    /// No prefix at all
    pub const fn bare() -> Self {
        Self::new(false, false)
    }
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Join parts with a space and encode the result as a JSON string literal.
///
/// The output is quoted and has newlines, quotes and control characters
/// escaped, so it always fits on one line.
pub fn format_error_message(parts: &[&str]) -> String {
    serde_json::Value::String(parts.join(" ")).to_string()
}

/// Builds log lines from message parts
///
/// Every logger composes one of these. The prefix is recomputed on each
/// call so timestamps reflect the moment of formatting.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use csvlog_core::context::FixedContext;
/// use csvlog_core::logging::{Formatter, LoggerOptions};
///
/// let ctx = Arc::new(FixedContext::new("alice", "/tmp"));
/// let formatter = Formatter::new(LoggerOptions::new(false, true), ctx);
/// assert_eq!(formatter.format(&["hello", "world"]), "alice;hello world");
/// ```
#[derive(Clone)]
pub struct Formatter {
    options: LoggerOptions,
    context: SharedContext,
}

impl Formatter {
    pub fn new(options: LoggerOptions, context: SharedContext) -> Self {
        Self { options, context }
    }

    pub fn options(&self) -> LoggerOptions {
        self.options
    }

    /// Enabled prefix fields in order (date, user), each followed by the delimiter
    pub fn prefix(&self) -> String {
        let mut prefix = String::new();
        if self.options.log_date {
            prefix.push_str(&timestamp(self.context.now()));
            prefix.push_str(DELIMITER);
        }
        if self.options.log_user {
            prefix.push_str(&self.context.user());
            prefix.push_str(DELIMITER);
        }
        prefix
    }

    /// `prefix()` followed by the parts joined with a single space
    pub fn format(&self, parts: &[&str]) -> String {
        let mut line = self.prefix();
        line.push_str(&parts.join(" "));
        line
    }

    pub fn format_error_message(&self, parts: &[&str]) -> String {
        format_error_message(parts)
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FixedContext;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn formatter(options: LoggerOptions) -> Formatter {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap();
        let ctx = FixedContext::new("alice", "/home/alice").with_time(instant);
        Formatter::new(options, Arc::new(ctx))
    }

    #[test]
    fn test_header() {
        assert_eq!(HEADER.as_str(), "[DATE];[USER];[ACTION]");
    }

    #[test]
    fn test_timestamp_format() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap();
        assert_eq!(timestamp(instant), "2024-05-01T12:30:05.000Z");
    }

    #[test]
    fn test_prefix_combinations() {
        assert_eq!(formatter(LoggerOptions::bare()).prefix(), "");
        assert_eq!(
            formatter(LoggerOptions::new(true, false)).prefix(),
            "2024-05-01T12:30:05.000Z;"
        );
        assert_eq!(formatter(LoggerOptions::new(false, true)).prefix(), "alice;");
        assert_eq!(
            formatter(LoggerOptions::new(true, true)).prefix(),
            "2024-05-01T12:30:05.000Z;alice;"
        );
    }

    #[test]
    fn test_format_is_prefix_plus_joined_parts() {
        let samples: &[&[&str]] = &[&[], &["one"], &["a", "b"], &["x", "", "y z"]];
        for options in [
            LoggerOptions::bare(),
            LoggerOptions::new(true, false),
            LoggerOptions::new(false, true),
            LoggerOptions::default(),
        ] {
            let f = formatter(options);
            for parts in samples {
                assert_eq!(f.format(parts), format!("{}{}", f.prefix(), parts.join(" ")));
            }
        }
    }

    #[test]
    fn test_bare_format_has_no_prefix() {
        assert_eq!(formatter(LoggerOptions::bare()).format(&["a", "b"]), "a b");
    }

    #[test]
    fn test_error_message_is_single_line() {
        let escaped = format_error_message(&["bad\nthing", "with \"quotes\"\r\n"]);
        assert!(!escaped.contains('\n'));
        assert!(!escaped.contains('\r'));
        assert!(escaped.starts_with('"') && escaped.ends_with('"'));
        assert_eq!(escaped, r#""bad\nthing with \"quotes\"\r\n""#);
    }

    #[test]
    fn test_error_message_escapes_backslash_and_controls() {
        assert_eq!(format_error_message(&["a\\b\tc"]), r#""a\\b\tc""#);
        assert_eq!(format_error_message(&["\u{1}"]), r#""\u0001""#);
    }

    #[test]
    fn test_error_message_empty() {
        assert_eq!(format_error_message(&[]), "\"\"");
    }

    #[test]
    fn test_options_defaults() {
        assert_eq!(LoggerOptions::default(), LoggerOptions::new(true, true));
        assert_eq!(LoggerOptions::bare(), LoggerOptions::new(false, false));
    }
}
