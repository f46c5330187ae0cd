//! SMTP delivery via `lettre`

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::{ExposeSecret, SecretString};

use super::message::WarningMessage;
use super::{NotifyError, NotifyResult};
use crate::config::MailSettings;

/// Delivers a warning message to its recipients
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends `message`; any failure is final
    async fn send(&self, message: &WarningMessage) -> NotifyResult<()>;
}

/// [`Mailer`] speaking authenticated, encrypted SMTP
pub struct SmtpMailer {
    host: String,
    port: u16,
    implicit_tls: bool,
    user: String,
    password: SecretString,
    from: Mailbox,
    to: Vec<Mailbox>,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("implicit_tls", &self.implicit_tls)
            .field("user", &self.user)
            .field("from", &self.from.to_string())
            .field("recipients", &self.to.len())
            .finish_non_exhaustive()
    }
}

impl SmtpMailer {
    /// Validates the `mail.*` settings and parses every address up front.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MissingSetting`] for an empty host or user,
    /// [`NotifyError::NoRecipients`] for an empty recipient list and
    /// [`NotifyError::Address`] for an unparseable address.
    pub fn from_settings(settings: &MailSettings) -> NotifyResult<Self> {
        if settings.host.trim().is_empty() {
            return Err(NotifyError::MissingSetting("mail.host"));
        }
        if settings.user.trim().is_empty() {
            return Err(NotifyError::MissingSetting("mail.user"));
        }
        if settings.wardens.is_empty() {
            return Err(NotifyError::NoRecipients);
        }

        let from: Mailbox = settings.sender_address().trim().parse()?;
        let to = settings
            .wardens
            .iter()
            .map(|address| address.trim().parse::<Mailbox>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host: settings.host.trim().to_string(),
            port: settings.port,
            implicit_tls: settings.implicit_tls(),
            user: settings.user.clone(),
            password: SecretString::from(settings.password.clone()),
            from,
            to,
        })
    }

    fn build_message(&self, message: &WarningMessage) -> NotifyResult<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN);
        for recipient in &self.to {
            builder = builder.to(recipient.clone());
        }
        builder
            .body(message.body.clone())
            .map_err(|e| NotifyError::Build(e.to_string()))
    }

    fn transport(&self) -> NotifyResult<AsyncSmtpTransport<Tokio1Executor>> {
        // 465 is SMTPS; everything else must upgrade with STARTTLS
        let builder = if self.implicit_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
        };
        let credentials = Credentials::new(
            self.user.clone(),
            self.password.expose_secret().to_string(),
        );
        Ok(builder.port(self.port).credentials(credentials).build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &WarningMessage) -> NotifyResult<()> {
        let email = self.build_message(message)?;
        let transport = self.transport()?;

        tracing::debug!(
            host = %self.host,
            port = self.port,
            recipients = self.to.len(),
            "Sending warning mail"
        );
        transport.send(email).await?;
        Ok(())
    }
}
