//! Shared utility functions used across command modules.

use std::fmt::Display;
use std::path::Path;

use warden_core::config::ConfigManager;
use warden_core::inventory::Inventory;
use warden_core::tracing::{TracingConfig, init_tracing};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    ConfigManager::from_flag(config_path)
        .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}")))
}

/// Loads `hosts.json`
pub fn load_inventory(manager: &ConfigManager) -> Result<Inventory, CliError> {
    manager
        .load_inventory()
        .map_err(|e| CliError::Config(format!("Failed to load hosts: {e}")))
}

/// Writes `hosts.json`
pub fn save_inventory(manager: &ConfigManager, inventory: &Inventory) -> Result<(), CliError> {
    manager
        .save_inventory(inventory)
        .map_err(|e| CliError::Config(format!("Failed to save hosts: {e}")))
}

/// Sends command events to `warden.log`.
///
/// Logging is best effort: a config directory that cannot be written must
/// not stop the command itself.
pub fn init_file_logging(config_path: Option<&Path>) {
    let Ok(manager) = create_config_manager(config_path) else {
        return;
    };
    let settings = manager.load_settings().unwrap_or_default();
    let _ = init_tracing(&TracingConfig::log_file(manager.log_path(), &settings.logging));
}

/// Confirmations and warnings, silenced by `--quiet`
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Prints a confirmation to stdout
    pub fn info(self, message: impl Display) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Reports a lookup miss; printed even with `--quiet`
    pub fn not_found(self, message: impl Display) {
        tracing::warn!("{message}");
        eprintln!("{message}");
    }

    /// Logs a warning and prints it to stderr
    pub fn warn(self, message: impl Display) {
        tracing::warn!("{message}");
        if !self.quiet {
            eprintln!("Warning: {message}");
        }
    }
}
