//! CLI error types and exit codes.

use warden_core::error::{ConfigError, InventoryError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, IO
    pub const GENERAL_ERROR: i32 = 1;
    /// The named host is not in the inventory
    pub const NOT_FOUND: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration files could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(String),

    /// A setting could not be read or assigned (type mismatch, invalid value, section key)
    #[error("{0}")]
    Setting(#[source] ConfigError),

    /// An inventory entry was rejected
    #[error("{0}")]
    Inventory(#[from] InventoryError),

    /// Host not found
    #[error("Host not found: {0}")]
    HostNotFound(String),

    /// Reading interactive input failed
    #[error("Input error: {0}")]
    Input(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, type mismatch, validation, IO)
    /// - 2: Host not found
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::HostNotFound(_) => exit_codes::NOT_FOUND,
            Self::Config(_)
            | Self::Setting(_)
            | Self::Inventory(_)
            | Self::Input(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
