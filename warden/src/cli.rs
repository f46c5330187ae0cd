//! Command-line arguments for the checker

use std::path::PathBuf;

use clap::Parser;

/// Checks disk usage on every inventory host and mails one warning for all
/// disks at or above their host's threshold
#[derive(Debug, Parser)]
#[command(name = "warden")]
#[command(author, version, about = "Remote disk usage check")]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the warning instead of mailing it
    #[arg(long)]
    pub dry_run: bool,

    /// Only check the named host (repeatable)
    #[arg(long = "host", value_name = "NAME")]
    pub hosts: Vec<String>,
}
