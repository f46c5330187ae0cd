//! Configuration management for Warden
//!
//! This module provides the `ConfigManager` for loading and saving the
//! inventory (`hosts.json`) and the settings tree (`config.json`), plus
//! dot-path access to individual settings.

mod manager;
mod path;
pub mod settings;

pub use manager::{CONFIG_DIR_ENV, ConfigManager, HOSTS_FILE, LOG_FILE, SETTINGS_FILE};
pub use path::{SetOutcome, render_value};
pub use settings::{CheckSettings, LoggingSettings, MailSettings, Settings};
