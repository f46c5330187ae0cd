//! List hosts command.

use std::path::Path;

use crate::error::CliError;
use crate::util::{Console, create_config_manager, load_inventory};

/// List hosts command handler
pub fn cmd_list_hosts(config_path: Option<&Path>, console: Console) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let inventory = load_inventory(&config_manager)?;

    if inventory.hosts.is_empty() {
        console.info("No hosts configured.");
        return Ok(());
    }

    let name_width = inventory
        .hosts
        .iter()
        .map(|h| h.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let dest_width = inventory
        .hosts
        .iter()
        .map(|h| h.destination().len())
        .max()
        .unwrap_or(11)
        .max(11);

    println!(
        "{:<name_width$}  {:<dest_width$}  {:>9}  DISKS",
        "NAME", "DESTINATION", "THRESHOLD"
    );
    for host in &inventory.hosts {
        println!(
            "{:<name_width$}  {:<dest_width$}  {:>8}%  {}",
            host.name,
            host.destination(),
            host.threshold,
            host.disks.join(",")
        );
    }

    Ok(())
}
