//! Settings schema stored in `config.json`
//!
//! The file is a nested JSON object. Every leaf has a fixed type; values are
//! addressed from the CLI with dot-separated paths such as `mail.port`
//! (see [`super::path`]). Entries the schema does not know are kept in each
//! section's `extra` map and written back unchanged.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::tracing::TracingLevel;

/// Default SMTP port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Root of `config.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Mail transport used for warnings
    #[serde(default)]
    pub mail: MailSettings,
    /// Remote check behavior
    #[serde(default)]
    pub check: CheckSettings,
    /// Log file behavior
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Top-level entries outside the schema
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// SMTP settings (`mail.*`)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailSettings {
    /// SMTP server hostname
    #[serde(default)]
    pub host: String,
    /// SMTP server port; 465 means implicit TLS, anything else STARTTLS
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// SMTP login
    #[serde(default)]
    pub user: String,
    /// SMTP password
    #[serde(default)]
    pub password: String,
    /// `From` address; empty means `user`
    #[serde(default)]
    pub sender: String,
    /// Recipients of the warning mail
    #[serde(default, deserialize_with = "deserialize_recipients")]
    pub wardens: Vec<String>,
    /// Unrecognized `mail.*` entries
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_SMTP_PORT,
            user: String::new(),
            password: String::new(),
            sender: String::new(),
            wardens: Vec::new(),
            extra: Map::new(),
        }
    }
}

// Keeps the password out of logs and panic messages
impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("sender", &self.sender)
            .field("wardens", &self.wardens)
            .field("extra", &self.extra)
            .finish()
    }
}

impl MailSettings {
    /// Address used in the `From` header
    #[must_use]
    pub fn sender_address(&self) -> &str {
        if self.sender.trim().is_empty() {
            &self.user
        } else {
            &self.sender
        }
    }

    /// Whether the port calls for implicit TLS (SMTPS) instead of STARTTLS
    #[must_use]
    pub const fn implicit_tls(&self) -> bool {
        self.port == 465
    }
}

/// Older configs stored a single recipient as a plain string
fn deserialize_recipients<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Recipients {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Recipients::deserialize(deserializer)? {
        Recipients::One(s) => split_list(&s),
        Recipients::Many(list) => list,
    })
}

/// Splits a comma-separated list, trimming entries and dropping empty ones
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Remote check settings (`check.*`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSettings {
    /// Upper bound for one host's report command, connection included
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// SSH `ConnectTimeout`
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Unrecognized `check.*` entries
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            extra: Map::new(),
        }
    }
}

/// Log file settings (`logging.*`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level written to the log
    #[serde(default = "default_level", deserialize_with = "deserialize_level")]
    pub level: String,
    /// Size at which `warden.log` is rotated
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Number of rotated files kept next to the live log
    #[serde(default = "default_backups")]
    pub backups: u32,
    /// Unrecognized `logging.*` entries
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_level() -> String {
    TracingLevel::default().to_string()
}

const fn default_max_bytes() -> u64 {
    1024 * 1024
}

const fn default_backups() -> u32 {
    3
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<TracingLevel>()
        .map(|level| level.to_string())
        .map_err(|()| D::Error::custom(format!("unknown log level '{raw}'")))
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            max_bytes: default_max_bytes(),
            backups: default_backups(),
            extra: Map::new(),
        }
    }
}

impl LoggingSettings {
    /// Parsed log level
    #[must_use]
    pub fn tracing_level(&self) -> TracingLevel {
        self.level.parse().unwrap_or_default()
    }
}
