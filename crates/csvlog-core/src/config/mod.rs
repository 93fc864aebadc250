//! Configuration file support
//!
//! Loggers are configured in code; the file layer only supplies the
//! destination of the file sink:
//! - `ConfigFile`: the YAML document
//! - `FileConfigProvider`: user-level or workspace-level file on disk

mod traits;
mod file;

pub use traits::{ConfigError, ConfigResult};
pub use file::{FileConfigProvider, ConfigFile, ConfigLevel, FileLoggerSettings};
