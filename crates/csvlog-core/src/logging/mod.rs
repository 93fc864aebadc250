//! Loggers and the formatting they share
//!
//! - `Logger` trait: the `{clear, log, error}` capability set
//! - `Formatter`: prefix assembly and message joining
//! - `ConsoleLogger`, `FileLogger`, `NoOpLogger`: sinks

mod traits;
mod format;
mod noop;
mod console;
mod file;

pub use traits::{Logger, LoggerError, LoggerResult, BoxedLogger, SharedLogger};
pub use format::{Formatter, LoggerOptions, DELIMITER, HEADER, format_error_message, timestamp};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use file::FileLogger;
