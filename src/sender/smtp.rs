//! SMTP delivery for [`MailSender`](crate::sender::mail_sender::MailSender) via lettre.

use lettre::message::header::{HeaderName, HeaderValue};
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use tracing::info;

use crate::core::error::TransportError;
use crate::sender::transport::{Mail, MailTransport};

/// Mail transport backed by a blocking lettre SMTP client
///
/// # Example
///
/// ```ignore
/// let transport = SmtpMailTransport::relay("smtp.example.com", 587, "user", "secret")?;
/// let sender = MailSender::new(transport, Serializer::with_defaults(), config)?;
/// ```
pub struct SmtpMailTransport {
    transport: SmtpTransport,
}

impl SmtpMailTransport {
    /// TLS relay with credentials
    pub fn relay(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self, TransportError> {
        let transport = SmtpTransport::relay(host)
            .map_err(TransportError::new)?
            .port(port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        Ok(Self { transport })
    }

    /// Plain connection to a local MTA on port 25
    pub fn localhost() -> Self {
        Self {
            transport: SmtpTransport::unencrypted_localhost(),
        }
    }

    pub fn from_transport(transport: SmtpTransport) -> Self {
        Self { transport }
    }

    fn build_message(mail: &Mail) -> Result<Message, TransportError> {
        let from: Mailbox = mail.sender.parse().map_err(TransportError::new)?;
        let mut builder = Message::builder().from(from);

        for recipient in &mail.recipients {
            let to: Mailbox = recipient.parse().map_err(TransportError::new)?;
            builder = builder.to(to);
        }

        if let Some(subject) = &mail.subject {
            builder = builder.subject(subject.clone());
        }

        for (name, value) in &mail.headers {
            let name = HeaderName::new_from_ascii(name.clone()).map_err(TransportError::new)?;
            builder = builder.raw_header(HeaderValue::new(name, value.clone()));
        }

        builder
            .body(mail.body.clone().unwrap_or_default())
            .map_err(TransportError::new)
    }
}

impl MailTransport for SmtpMailTransport {
    fn send(&self, mail: &Mail) -> Result<(), TransportError> {
        let message = Self::build_message(mail)?;
        self.transport.send(&message).map_err(TransportError::new)?;

        info!(recipients = mail.recipients.len(), "mail sent over SMTP");
        Ok(())
    }
}
