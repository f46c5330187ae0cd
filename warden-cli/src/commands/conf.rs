//! Settings commands (`set-conf`, `get-conf`).

use std::path::Path;

use warden_core::config::{SetOutcome, render_value};

use crate::error::CliError;
use crate::util::{Console, create_config_manager};

/// Settings whose values are never echoed back
const SECRET_KEYS: [&str; 1] = ["mail.password"];

/// Set conf command handler
pub fn cmd_set_conf(
    config_path: Option<&Path>,
    console: Console,
    key: &str,
    value: Option<String>,
) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let mut settings = config_manager
        .load_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))?;

    // Unknown keys are reported before prompting for a value
    let exists = settings
        .get_path(key)
        .map_err(CliError::Setting)?
        .is_some();
    if !exists {
        console.warn(format!("Setting '{key}' not found"));
        return Ok(());
    }

    let value = match value {
        Some(value) => value,
        None => {
            eprint!("Value for '{key}': ");
            rpassword::read_password()
                .map_err(|e| CliError::Input(format!("Failed to read value: {e}")))?
        }
    };

    match settings.set_path(key, &value).map_err(CliError::Setting)? {
        SetOutcome::NotFound => console.warn(format!("Setting '{key}' not found")),
        SetOutcome::Updated { previous, current } => {
            config_manager
                .save_settings(&settings)
                .map_err(|e| CliError::Config(format!("Failed to save settings: {e}")))?;
            tracing::info!(key, "Setting updated");
            if SECRET_KEYS.contains(&key) {
                console.info(format!("Updated {key}"));
            } else {
                console.info(format!("Updated {key}: {previous} -> {current}"));
            }
        }
    }

    Ok(())
}

/// Get conf command handler
pub fn cmd_get_conf(config_path: Option<&Path>, console: Console, key: &str) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let settings = config_manager
        .load_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))?;

    match settings.get_path(key).map_err(CliError::Setting)? {
        Some(value) => println!("{key}={}", render_value(&value)),
        None => console.not_found(format!("Setting '{key}' not found")),
    }

    Ok(())
}
