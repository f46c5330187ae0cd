//! Edit host command.

use std::path::Path;

use warden_core::inventory::HostEdit;

use crate::error::CliError;
use crate::util::{Console, create_config_manager, load_inventory, save_inventory};

/// Edit host command handler
pub fn cmd_edit_host(
    config_path: Option<&Path>,
    console: Console,
    name: &str,
    edit: HostEdit,
) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let mut inventory = load_inventory(&config_manager)?;

    if edit.is_empty() {
        if inventory.find(name).is_none() {
            return Err(CliError::HostNotFound(name.to_string()));
        }
        console.warn("No changes specified (use --host, --user, --threshold or --disks)");
        return Ok(());
    }

    if inventory.edit(name, edit)?.is_none() {
        return Err(CliError::HostNotFound(name.to_string()));
    }

    save_inventory(&config_manager, &inventory)?;
    tracing::info!(host = %name, "Host updated");
    console.info(format!("Updated host '{name}'"));

    Ok(())
}
