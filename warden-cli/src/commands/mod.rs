//! Command handler modules for the CLI.

mod add_host;
mod completions;
mod conf;
mod edit_host;
mod get_host;
mod list_hosts;
mod logs;
mod remove_host;

use std::path::Path;

use warden_core::inventory::HostEdit;

use crate::cli::Commands;
use crate::error::CliError;
use crate::util::Console;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(
    config_path: Option<&Path>,
    console: Console,
    command: Commands,
) -> Result<(), CliError> {
    match command {
        Commands::AddHost {
            name,
            host,
            user,
            threshold,
            disks,
        } => add_host::cmd_add_host(
            config_path,
            console,
            add_host::AddHostParams {
                name: &name,
                host: &host,
                user: &user,
                threshold,
                disks,
            },
        ),
        Commands::RemoveHost { name } => remove_host::cmd_remove_host(config_path, console, &name),
        Commands::GetHost { name } => get_host::cmd_get_host(config_path, console, &name),
        Commands::EditHost {
            name,
            host,
            user,
            threshold,
            disks,
        } => edit_host::cmd_edit_host(
            config_path,
            console,
            &name,
            HostEdit {
                host,
                user,
                threshold,
                disks,
            },
        ),
        Commands::ListHosts => list_hosts::cmd_list_hosts(config_path, console),
        Commands::SetConf { key, value } => conf::cmd_set_conf(config_path, console, &key, value),
        Commands::GetConf { key } => conf::cmd_get_conf(config_path, console, &key),
        Commands::Logs { no_pager } => logs::cmd_logs(config_path, console, no_pager),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
