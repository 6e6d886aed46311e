// error.rs - Error types for the editor core

use std::path::PathBuf;
use thiserror::Error;

/// Recoverable failures surfaced to the user through the status line.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Error: Cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: Cannot save {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid filename")]
    InvalidFilename,
}

/// Failures while reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
