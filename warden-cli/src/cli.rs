//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use warden_core::models::parse_threshold;

/// Manages the host inventory and settings used by `warden`
#[derive(Parser)]
#[command(name = "warden-configure")]
#[command(author, version, about = "Warden configuration utility")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress confirmations and warnings; errors and requested data are
    /// still printed
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a host to the inventory
    #[command(about = "Add a host to the inventory (no-op if the name exists)")]
    AddHost {
        /// Unique host name
        name: String,

        /// Hostname or IP address used for SSH
        host: String,

        /// Remote login user
        user: String,

        /// Usage percentage (0-100) at which a disk is reported
        #[arg(value_parser = parse_threshold)]
        threshold: u8,

        /// Disks to monitor, e.g. sda1 or /dev/sda1
        #[arg(required = true, num_args = 1..)]
        disks: Vec<String>,
    },

    /// Remove a host from the inventory
    RemoveHost {
        /// Host name
        name: String,
    },

    /// Show one inventory entry
    GetHost {
        /// Host name
        name: String,
    },

    /// Change fields of an inventory entry
    #[command(about = "Change fields of an inventory entry; omitted fields are kept")]
    EditHost {
        /// Host name
        name: String,

        /// New hostname or IP address
        #[arg(long)]
        host: Option<String>,

        /// New login user
        #[arg(long)]
        user: Option<String>,

        /// New threshold (0-100)
        #[arg(long, value_parser = parse_threshold)]
        threshold: Option<u8>,

        /// New disk set, replacing the current one
        #[arg(long, num_args = 1..)]
        disks: Option<Vec<String>>,
    },

    /// List all inventory entries
    ListHosts,

    /// Set a setting by dot-separated key
    #[command(about = "Set a setting, e.g. `set-conf mail.port 465`")]
    SetConf {
        /// Dot-separated key such as mail.host
        key: String,

        /// New value; prompted for without echo when omitted
        value: Option<String>,
    },

    /// Print a setting as key=value
    GetConf {
        /// Dot-separated key such as mail.host
        key: String,
    },

    /// Show the checker log
    #[command(about = "Show the log file through $PAGER (default: less)")]
    Logs {
        /// Print the log instead of paging it
        #[arg(long)]
        no_pager: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command only reads configuration
    pub const fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::GetHost { .. }
                | Self::ListHosts
                | Self::GetConf { .. }
                | Self::Logs { .. }
                | Self::Completions { .. }
        )
    }
}
