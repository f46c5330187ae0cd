//! Show host details command.

use std::path::Path;

use warden_core::models::Host;

use crate::error::CliError;
use crate::util::{Console, create_config_manager, load_inventory};

/// Get host command handler
pub fn cmd_get_host(config_path: Option<&Path>, console: Console, name: &str) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let inventory = load_inventory(&config_manager)?;

    match inventory.find(name) {
        Some(host) => print!("{}", format_host(host)),
        None => console.not_found(format!("Host '{name}' not found")),
    }

    Ok(())
}

fn format_host(host: &Host) -> String {
    format!(
        "Host: {}\n  Address:   {}\n  User:      {}\n  Threshold: {}%\n  Disks:     {}\n",
        host.name,
        host.host,
        host.user,
        host.threshold,
        host.disks.join(", ")
    )
}
