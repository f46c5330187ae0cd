//! Configuration directory and file persistence

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::settings::Settings;
use crate::error::{ConfigError, ConfigResult};
use crate::inventory::Inventory;
use crate::tracing::span_names;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "WARDEN_CONFIG_DIR";

/// Inventory file name
pub const HOSTS_FILE: &str = "hosts.json";
/// Settings file name
pub const SETTINGS_FILE: &str = "config.json";
/// Log file name
pub const LOG_FILE: &str = "warden.log";

/// Loads and saves the files of one configuration directory.
///
/// Nothing is cached: every `load_*` reads the file again, so a
/// read-modify-write is `load_*`, mutate, `save_*`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Uses `$WARDEN_CONFIG_DIR`, falling back to `<user config dir>/warden`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] when neither is available.
    pub fn new() -> ConfigResult<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_config_dir(PathBuf::from(dir)));
        }
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join("warden")))
    }

    /// Uses an explicit directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Creates from an optional `--config` flag value
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_flag(config_dir: Option<&Path>) -> ConfigResult<Self> {
        match config_dir {
            Some(dir) => Ok(Self::with_config_dir(dir.to_path_buf())),
            None => Self::new(),
        }
    }

    /// The configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of `hosts.json`
    #[must_use]
    pub fn hosts_path(&self) -> PathBuf {
        self.config_dir.join(HOSTS_FILE)
    }

    /// Path of `config.json`
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Path of `warden.log`
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.config_dir.join(LOG_FILE)
    }

    /// Loads `config.json`; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> ConfigResult<Settings> {
        Ok(self.load_json(&self.settings_path())?.unwrap_or_default())
    }

    /// Writes `config.json`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_settings(&self, settings: &Settings) -> ConfigResult<()> {
        self.save_json(&self.settings_path(), settings)
    }

    /// Loads `hosts.json`; a missing file yields an empty inventory
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_inventory(&self) -> ConfigResult<Inventory> {
        let inventory: Inventory = self.load_json(&self.hosts_path())?.unwrap_or_default();
        for name in inventory.duplicate_names() {
            tracing::warn!(host = %name, "Inventory contains duplicate host name");
        }
        Ok(inventory)
    }

    /// Writes `hosts.json`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_inventory(&self, inventory: &Inventory) -> ConfigResult<()> {
        self.save_json(&self.hosts_path(), inventory)
    }

    /// Creates the configuration directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> ConfigResult<()> {
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })
    }

    fn load_json<T: DeserializeOwned>(&self, path: &Path) -> ConfigResult<Option<T>> {
        let _span = tracing::debug_span!(span_names::CONFIG_LOAD, path = %path.display()).entered();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("File not found, using defaults");
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Pretty-prints `value` into a sibling temp file and renames it over
    /// `path`, so readers never observe a half-written file.
    fn save_json<T: Serialize>(&self, path: &Path, value: &T) -> ConfigResult<()> {
        let _span = tracing::debug_span!(span_names::CONFIG_SAVE, path = %path.display()).entered();
        self.ensure_config_dir()?;

        let mut content = serde_json::to_string_pretty(value)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        content.push('\n');

        let tmp = path.with_extension("json.tmp");
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&tmp, content).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }
}
