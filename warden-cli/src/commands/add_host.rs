//! Add host command.

use std::path::Path;

use warden_core::inventory::AddOutcome;
use warden_core::models::Host;

use crate::error::CliError;
use crate::util::{Console, create_config_manager, load_inventory, save_inventory};

/// Parameters for the add-host command
pub struct AddHostParams<'a> {
    pub name: &'a str,
    pub host: &'a str,
    pub user: &'a str,
    pub threshold: u8,
    pub disks: Vec<String>,
}

/// Add host command handler
pub fn cmd_add_host(
    config_path: Option<&Path>,
    console: Console,
    params: AddHostParams<'_>,
) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let mut inventory = load_inventory(&config_manager)?;

    let host = Host::new(
        params.name,
        params.host,
        params.user,
        params.threshold,
        params.disks,
    );

    match inventory.add(host)? {
        AddOutcome::AlreadyExists => {
            console.warn(format!(
                "Host '{}' already exists, nothing changed (use edit-host to modify it)",
                params.name
            ));
        }
        AddOutcome::Added => {
            save_inventory(&config_manager, &inventory)?;
            tracing::info!(host = %params.name, "Host added");
            console.info(format!("Added host '{}'", params.name));
        }
    }

    Ok(())
}
