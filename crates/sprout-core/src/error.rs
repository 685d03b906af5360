//! Error types for sprout-core

use thiserror::Error;

/// Result type alias using sprout-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Sprout
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// Selected package manager has no definition
    #[error("Unknown package manager: {name}. Available: {available}")]
    UnknownPackageManager { name: String, available: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unknown package manager error
    pub fn unknown_package_manager(
        name: impl Into<String>,
        available: impl Into<String>,
    ) -> Self {
        Self::UnknownPackageManager {
            name: name.into(),
            available: available.into(),
        }
    }
}
