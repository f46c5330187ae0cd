//! Warning mail delivery
//!
//! Collapses the notifications of one run into a single [`WarningMessage`]
//! and hands it to a [`Mailer`]. An empty run sends nothing.

mod mailer;
mod message;

pub use mailer::{Mailer, SmtpMailer};
pub use message::{WARNING_SUBJECT, WarningMessage};

use tracing::Instrument;

use crate::models::Notification;
use crate::tracing::span_names;

/// Errors raised while building or sending the warning mail
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// SMTP transport-level failure (connection, TLS, authentication)
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// A sender or recipient address could not be parsed
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("Email build error: {0}")]
    Build(String),

    /// `mail.wardens` is empty
    #[error("No recipients configured (mail.wardens is empty)")]
    NoRecipients,

    /// A required `mail.*` setting is empty
    #[error("Mail setting '{0}' is not configured")]
    MissingSetting(&'static str),
}

/// Result type for notification operations
pub type NotifyResult<T> = Result<T, NotifyError>;

/// What [`Notifier::notify`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Nothing breached; no mail was sent
    Skipped,
    /// One mail covering this many hosts was sent
    Sent {
        /// Number of hosts in the message
        hosts: usize,
    },
}

/// Sends the warning mail for a run through a [`Mailer`]
pub struct Notifier<M> {
    mailer: M,
    origin: String,
}

impl<M: Mailer> Notifier<M> {
    /// Creates a notifier; `origin` names the machine in the intro line
    pub fn new(mailer: M, origin: impl Into<String>) -> Self {
        Self {
            mailer,
            origin: origin.into(),
        }
    }

    /// Creates a notifier that names the local hostname in the intro line
    pub fn with_local_origin(mailer: M) -> Self {
        Self::new(mailer, local_hostname())
    }

    /// Sends one message covering `notifications`, or nothing when empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be built or delivered. Mail
    /// failures are not retried.
    pub async fn notify(&self, notifications: &[Notification]) -> NotifyResult<NotifyOutcome> {
        let Some(message) = WarningMessage::for_run(notifications, &self.origin) else {
            tracing::info!("No disk above threshold, no mail sent");
            return Ok(NotifyOutcome::Skipped);
        };

        let span = tracing::info_span!(span_names::MAIL_SEND, hosts = notifications.len());
        self.mailer.send(&message).instrument(span).await?;
        tracing::info!(hosts = notifications.len(), "Warning mail sent");
        Ok(NotifyOutcome::Sent {
            hosts: notifications.len(),
        })
    }
}

/// Local hostname, or `localhost` when it cannot be read
#[must_use]
pub fn local_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string())
}
