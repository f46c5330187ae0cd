//! Monitored host model.
//!
//! A [`Host`] is one entry of the inventory file: where to connect, which
//! disks to watch and the usage percentage at which a warning is raised.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Device prefix that reports and inventories may or may not carry
pub const DEV_PREFIX: &str = "/dev/";

/// Highest accepted threshold (percent)
pub const MAX_THRESHOLD: u8 = 100;

/// A remote machine with declared disks and a warning threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Unique host name used to address the entry
    pub name: String,
    /// Hostname or IP address used for the SSH connection
    pub host: String,
    /// Remote login user
    pub user: String,
    /// Disk identifiers to monitor (`/dev/sda1` or `sda1`)
    #[serde(default)]
    pub disks: Vec<String>,
    /// Usage percentage (inclusive) that triggers a warning
    #[serde(deserialize_with = "deserialize_threshold")]
    pub threshold: u8,
}

impl Host {
    /// Creates a host, dropping duplicate disk entries while keeping order
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        user: impl Into<String>,
        threshold: u8,
        disks: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            user: user.into(),
            disks: dedup_disks(disks),
            threshold,
        }
    }

    /// Replaces the disk set, dropping duplicates while keeping order
    pub fn set_disks(&mut self, disks: Vec<String>) {
        self.disks = dedup_disks(disks);
    }

    /// Returns true if `disk` (as reported remotely) is one of this host's
    /// monitored disks, with or without the `/dev/` prefix on either side.
    #[must_use]
    pub fn monitors(&self, disk: &str) -> bool {
        let stripped = strip_dev(disk);
        self.disks
            .iter()
            .any(|configured| configured == disk || strip_dev(configured) == stripped)
    }

    /// SSH destination in `user@host` form
    #[must_use]
    pub fn destination(&self) -> String {
        if self.user.is_empty() {
            self.host.clone()
        } else {
            format!("{}@{}", self.user, self.host)
        }
    }
}

/// Strips a literal `/dev/` prefix, if present
#[must_use]
pub fn strip_dev(disk: &str) -> &str {
    disk.strip_prefix(DEV_PREFIX).unwrap_or(disk)
}

/// Parses a threshold percentage in the range 0–100.
///
/// Used both by the CLI argument parser and when loading inventories that
/// stored the threshold as a string.
///
/// # Errors
///
/// Returns a message when the value is not an integer or is above 100.
pub fn parse_threshold(value: &str) -> Result<u8, String> {
    let trimmed = value.trim();
    let parsed: u8 = trimmed
        .parse()
        .map_err(|_| format!("invalid threshold '{value}': expected an integer 0-100"))?;
    if parsed > MAX_THRESHOLD {
        return Err(format!("invalid threshold '{value}': must be at most 100"));
    }
    Ok(parsed)
}

fn dedup_disks(disks: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(disks.len());
    for disk in disks {
        if !unique.contains(&disk) {
            unique.push(disk);
        }
    }
    unique
}

/// Accepts `"threshold": 80` as well as `"threshold": "80"`
fn deserialize_threshold<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawThreshold {
        Number(i64),
        Text(String),
    }

    match RawThreshold::deserialize(deserializer)? {
        RawThreshold::Number(n) => u8::try_from(n)
            .ok()
            .filter(|v| *v <= MAX_THRESHOLD)
            .ok_or_else(|| D::Error::custom(format!("threshold {n} is outside 0-100"))),
        RawThreshold::Text(s) => parse_threshold(&s).map_err(D::Error::custom),
    }
}
