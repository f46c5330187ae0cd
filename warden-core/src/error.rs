//! Error types for Warden
//!
//! Each concern has its own `thiserror` enum; [`WardenError`] aggregates them
//! for callers that drive a whole run.

use std::path::PathBuf;

use thiserror::Error;

pub use crate::monitoring::ExecError;
pub use crate::notify::NotifyError;
pub use crate::tracing::TracingError;

/// Errors raised while loading, validating or saving configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration directory could not be determined
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// A file could not be read or written
    #[error("Failed to access {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A file contained malformed JSON or did not match the schema
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Serialization of in-memory state failed
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// The new value does not have the type of the value stored at the key
    #[error("Type mismatch for '{key}': expected {expected}, got '{value}'")]
    TypeMismatch {
        /// Dot-separated key
        key: String,
        /// Type of the existing value
        expected: &'static str,
        /// Raw value that was rejected
        value: String,
    },

    /// The value has the right type but violates the schema
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Dot-separated key
        key: String,
        /// Why the schema rejected it
        reason: String,
    },

    /// The key addresses a section rather than a single setting
    #[error("'{0}' is a section, not a setting")]
    NotASetting(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by inventory mutations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Host entry failed validation
    #[error("Invalid host '{name}': {reason}")]
    InvalidHost {
        /// Host name
        name: String,
        /// Validation failure
        reason: String,
    },
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Top-level error for a Warden run
#[derive(Debug, Error)]
pub enum WardenError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Mail error
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Tracing(#[from] TracingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = ConfigError::TypeMismatch {
            key: "mail.port".into(),
            expected: "integer",
            value: "not-a-number".into(),
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch for 'mail.port': expected integer, got 'not-a-number'"
        );
    }

    #[test]
    fn test_warden_error_wraps_config() {
        let err: WardenError = ConfigError::NoConfigDir.into();
        assert!(matches!(err, WardenError::Config(ConfigError::NoConfigDir)));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
