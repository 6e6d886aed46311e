use crate::error::ConfigError;
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Editor limits and timings, read from `config.toml`.
///
/// Every field is optional in the file; missing keys fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Maximum number of lines a buffer may hold.
    pub max_lines: usize,
    /// Maximum number of chars in a single line.
    pub max_line_len: usize,
    /// Maximum number of undo entries kept per buffer.
    pub undo_capacity: usize,
    /// How long a Ctrl-X prefix waits for its second key.
    pub prefix_timeout_ms: u64,
    /// Width of the line-number gutter.
    pub gutter_width: u16,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_lines: 10_000,
            max_line_len: 1024,
            undo_capacity: 1000,
            prefix_timeout_ms: 1000,
            gutter_width: 6,
        }
    }
}

impl EditorConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the user config directory when
    /// one exists there, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!("Loading config from {}", path.display());
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                info!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn prefix_timeout(&self) -> Duration {
        Duration::from_millis(self.prefix_timeout_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lines == 0 {
            return Err(ConfigError::Invalid("max_lines must be at least 1".into()));
        }
        if self.max_line_len == 0 {
            return Err(ConfigError::Invalid("max_line_len must be at least 1".into()));
        }
        Ok(())
    }
}

/// `$XDG_CONFIG_HOME/micrn/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("micrn").join("config.toml"))
}
