//! Warden Core Library
//!
//! This crate provides the core functionality of Warden, a remote disk usage
//! monitor: it checks the free-space report of every inventory host over SSH
//! and mails one warning listing each disk at or above its host's threshold.
//!
//! # Crate Structure
//!
//! - [`models`] - Core data structures (Host, DiskUsage, Notification)
//! - [`config`] - Configuration directory, settings schema and dot-path access
//! - [`inventory`] - Host inventory and its mutations
//! - [`monitoring`] - Report parsing, threshold filtering and the SSH checker
//! - [`notify`] - Warning message and SMTP delivery
//! - [`tracing`] - Logging setup and the rotating log file

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod monitoring;
pub mod notify;
pub mod tracing;

pub use config::{ConfigManager, SetOutcome, Settings};
pub use error::{
    ConfigError, ConfigResult, ExecError, InventoryError, InventoryResult, NotifyError,
    TracingError, WardenError,
};
pub use inventory::{AddOutcome, HostEdit, Inventory};
pub use models::{DiskUsage, Host, Notification};
pub use monitoring::{
    DF_COMMAND, DiskReportParser, RemoteExecutor, SshExecutor, breaching_disks, check_hosts,
};
pub use notify::{Mailer, Notifier, NotifyOutcome, NotifyResult, SmtpMailer, WarningMessage};
pub use tracing::{TracingConfig, TracingLevel, init_tracing};
