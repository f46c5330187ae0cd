//! `warden-configure` - configuration utility for Warden
//!
//! Manages the host inventory (`hosts.json`) and the settings tree
//! (`config.json`) read by the `warden` checker, and shows its log.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;
use util::Console;

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    // Read-only commands only touch the log when they fail
    let read_only = cli.command.is_read_only();
    if !read_only {
        util::init_file_logging(config_path);
    }

    let result = commands::dispatch(config_path, Console::new(cli.quiet), cli.command);

    if let Err(e) = result {
        if read_only {
            util::init_file_logging(config_path);
        }
        tracing::error!(error = ?e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
