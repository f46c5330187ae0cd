//! Per-run check results.

use serde::Serialize;

use super::Host;

/// One parsed line of a free-space report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskUsage {
    /// Disk identifier as reported by the remote command
    pub name: String,
    /// Used space in percent
    pub usage: u32,
}

impl DiskUsage {
    /// Creates a usage record
    #[must_use]
    pub fn new(name: impl Into<String>, usage: u32) -> Self {
        Self {
            name: name.into(),
            usage,
        }
    }
}

/// The disks of one host that reached its threshold during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Host name (not the address)
    pub host: String,
    /// The host's configured threshold, carried for the message
    pub threshold: u8,
    /// Breaching disks in report order
    pub disks: Vec<DiskUsage>,
}

impl Notification {
    /// Builds a notification for `host`, or `None` when nothing breached
    #[must_use]
    pub fn for_host(host: &Host, disks: Vec<DiskUsage>) -> Option<Self> {
        if disks.is_empty() {
            return None;
        }
        Some(Self {
            host: host.name.clone(),
            threshold: host.threshold,
            disks,
        })
    }
}
