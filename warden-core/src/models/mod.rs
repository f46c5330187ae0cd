//! Core data models for Warden
//!
//! [`Host`] is persisted in the inventory; [`DiskUsage`] and
//! [`Notification`] only live for the duration of one check run.

mod host;
mod notification;

pub use host::{DEV_PREFIX, Host, MAX_THRESHOLD, parse_threshold, strip_dev};
pub use notification::{DiskUsage, Notification};
