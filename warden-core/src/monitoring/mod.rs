//! Remote disk-usage checks
//!
//! Runs [`DF_COMMAND`] on each inventory host over SSH, parses the free-space
//! report, and keeps the monitored disks at or above the host threshold.
//!
//! The SSH transport sits behind [`RemoteExecutor`] so the checker can run
//! against scripted output in tests.

mod checker;
mod filter;
mod parser;
pub mod ssh_exec;

pub use checker::{check_host, check_hosts};
pub use filter::breaching_disks;
pub use parser::{DF_COMMAND, DiskReportParser};
pub use ssh_exec::{CommandOutput, ExecError, RemoteExecutor, SshExecutor};
