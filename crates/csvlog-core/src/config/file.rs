//! File-based configuration (YAML)
//!
//! Supports user-level (~/.config/csvlog/config.yaml) and workspace-level (.config/csvlog/config.yaml) config.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::traits::ConfigResult;

/// Configuration file structure
///
/// ```yaml
/// file:
///   path: /var/log/app/alice-log.csv
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Settings for `FileLogger`
    #[serde(default)]
    pub file: FileLoggerSettings,
}

/// Settings for the file sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FileLoggerSettings {
    /// Destination; `<cwd>/<user>-log.csv` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/csvlog/config.yaml)
    User,
    /// Workspace-level config (.config/csvlog/config.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// Reads and writes a `ConfigFile` on disk
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use csvlog_core::config::FileConfigProvider;
/// use csvlog_core::context::EnvContext;
/// use csvlog_core::logging::FileLogger;
///
/// let config = FileConfigProvider::workspace("/path/to/workspace").load().unwrap();
/// let logger = FileLogger::from_config(&config, Arc::new(EnvContext::new())).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    path: PathBuf,
    level: ConfigLevel,
}

impl FileConfigProvider {
    /// Create a new file config provider for a specific path
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }

    /// Create a user-level config provider (~/.config/csvlog/config.yaml)
    pub fn user() -> Self {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("csvlog").join("config.yaml"), ConfigLevel::User)
    }

    /// Create a workspace-level config provider (.config/csvlog/config.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("csvlog").join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the config level
    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load config from file; a missing file yields the defaults
    pub fn load(&self) -> ConfigResult<ConfigFile> {
        if !self.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), level = self.level.as_str(), "loaded config");
        Ok(config)
    }

    /// Save config to file, creating parent directories
    pub fn save(&self, config: &ConfigFile) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Update only the file sink destination, keeping the rest of the file
    pub fn set_file_path(&self, path: Option<PathBuf>) -> ConfigResult<()> {
        let mut config = self.load()?;
        config.file.path = path;
        self.save(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::workspace(dir.path());

        assert!(!provider.exists());
        assert_eq!(provider.load().unwrap(), ConfigFile::default());
        assert_eq!(provider.level(), ConfigLevel::Workspace);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::workspace(dir.path());
        let config = ConfigFile {
            file: FileLoggerSettings {
                path: Some(PathBuf::from("/var/log/app/alice-log.csv")),
            },
        };

        provider.save(&config).unwrap();

        assert!(provider.exists());
        assert!(provider.path().ends_with(".config/csvlog/config.yaml"));
        assert_eq!(provider.load().unwrap(), config);
    }

    #[test]
    fn test_yaml_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "file:\n  path: /data/audit.csv\n").unwrap();

        let config = FileConfigProvider::new(&path, ConfigLevel::User).load().unwrap();
        assert_eq!(config.file.path, Some(PathBuf::from("/data/audit.csv")));

        fs::write(&path, "{}\n").unwrap();
        let config = FileConfigProvider::new(&path, ConfigLevel::User).load().unwrap();
        assert_eq!(config.file.path, None);
    }

    #[test]
    fn test_set_file_path() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::workspace(dir.path());

        provider.set_file_path(Some(PathBuf::from("/data/audit.csv"))).unwrap();
        assert_eq!(provider.load().unwrap().file.path, Some(PathBuf::from("/data/audit.csv")));

        provider.set_file_path(None).unwrap();
        assert_eq!(provider.load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "file: [unterminated\n").unwrap();

        let result = FileConfigProvider::new(&path, ConfigLevel::User).load();
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_user_level_path() {
        let provider = FileConfigProvider::user();
        assert_eq!(provider.level(), ConfigLevel::User);
        assert!(provider.path().ends_with("csvlog/config.yaml"));
    }
}
