//! Remove host command.

use std::path::Path;

use crate::error::CliError;
use crate::util::{Console, create_config_manager, load_inventory, save_inventory};

/// Remove host command handler
pub fn cmd_remove_host(
    config_path: Option<&Path>,
    console: Console,
    name: &str,
) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let mut inventory = load_inventory(&config_manager)?;

    if inventory.remove(name).is_none() {
        console.warn(format!("Host '{name}' is not in the inventory"));
        return Ok(());
    }

    save_inventory(&config_manager, &inventory)?;
    tracing::info!(host = %name, "Host removed");
    console.info(format!("Removed host '{name}'"));

    Ok(())
}
