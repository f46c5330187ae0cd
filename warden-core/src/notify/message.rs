//! Plain-text warning message

use std::fmt::Write as _;

use chrono::{Local, NaiveDateTime};

use crate::models::Notification;

/// Subject of every warning mail
pub const WARNING_SUBJECT: &str = "Warden: disk usage warning";

/// The single message sent for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningMessage {
    /// Mail subject
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl WarningMessage {
    /// Builds the message for `notifications`, or `None` if there are none.
    ///
    /// ```text
    /// Disk usage check run on <origin> at 2026-10-19 06:00:00 found disks
    /// at or above their threshold.
    ///
    /// web1 [threshold=90%]:
    ///     /dev/sda1 -> 95%
    /// ```
    #[must_use]
    pub fn build(
        notifications: &[Notification],
        origin: &str,
        checked_at: NaiveDateTime,
    ) -> Option<Self> {
        if notifications.is_empty() {
            return None;
        }

        let mut body = format!(
            "Disk usage check run on {origin} at {} found disks at or above their threshold.\n",
            checked_at.format("%Y-%m-%d %H:%M:%S")
        );
        for notification in notifications {
            let _ = write!(
                body,
                "\n{} [threshold={}%]:\n",
                notification.host, notification.threshold
            );
            for disk in &notification.disks {
                let _ = writeln!(body, "    {} -> {}%", disk.name, disk.usage);
            }
        }

        Some(Self {
            subject: WARNING_SUBJECT.to_string(),
            body,
        })
    }

    /// [`Self::build`] stamped with the current local time
    #[must_use]
    pub fn for_run(notifications: &[Notification], origin: &str) -> Option<Self> {
        Self::build(notifications, origin, Local::now().naive_local())
    }
}
