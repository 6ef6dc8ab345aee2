use tracing::{debug, warn};

use crate::core::chain_node::{ChainNode, Successor};
use crate::core::data_holder::DataHolder;
use crate::core::error::{ConfigError, Result};
use crate::core::exception::Exception;
use crate::sender::config::SenderConfig;
use crate::sender::encoder::ContentEncoder;
use crate::sender::transport::{Mail, MailTransport};

/// Chain node that mails every exception it sees, then forwards it
///
/// # Construction
///
/// The configuration is validated once, before any mail can be sent. A node that
/// fails validation is never produced:
///
/// * `sender` must be a valid address
/// * `recipients` must be a non-empty list of valid addresses
/// * a configured `format` must be supported by the encoder
///
/// # Handling
///
/// * **Subject**: `subject` from the context, else the configured subject, else none
/// * **Body**: the context encoded in the configured format, or none without a format
/// * **Headers**: the configured headers, empty when none were configured
///
/// The transport is called exactly once per `handle`. A transport error aborts the
/// rest of the chain; otherwise the exception and the same context are forwarded.
///
/// # Example
///
/// ```ignore
/// let config = SenderConfig::new("alerts@example.com", &["ops@example.com"])
///     .with_format("text")
///     .with_subject("Production error");
///
/// let sender = MailSender::new(transport, Serializer::with_defaults(), config)?;
/// ```
pub struct MailSender {
    transport: Box<dyn MailTransport>,
    encoder: Box<dyn ContentEncoder>,
    config: SenderConfig,
    next: Successor,
}

impl MailSender {
    /// Create a sender from a typed configuration, validating it first
    pub fn new<T, E>(transport: T, encoder: E, config: SenderConfig) -> Result<Self>
    where
        T: MailTransport + 'static,
        E: ContentEncoder + 'static,
    {
        config.validate()?;

        if let Some(format) = &config.format {
            if !encoder.supports_encoding(format) {
                return Err(ConfigError::UnsupportedFormat {
                    format: format.clone(),
                }
                .into());
            }
        }

        Ok(Self {
            transport: Box::new(transport),
            encoder: Box::new(encoder),
            config,
            next: Successor::new(),
        })
    }

    /// Create a sender from a configuration bag
    pub fn from_data_holder<T, E>(transport: T, encoder: E, configuration: &DataHolder) -> Result<Self>
    where
        T: MailTransport + 'static,
        E: ContentEncoder + 'static,
    {
        let config = SenderConfig::from_data_holder(configuration)?;
        Self::new(transport, encoder, config)
    }

    pub fn config(&self) -> &SenderConfig {
        &self.config
    }

    fn compose(&self, context: &DataHolder) -> Result<Mail> {
        let subject = context
            .get_str("subject")
            .map(str::to_string)
            .or_else(|| self.config.subject.clone());

        let body = match &self.config.format {
            Some(format) => Some(self.encoder.encode(&context.to_value(), format)?),
            None => None,
        };

        Ok(Mail {
            sender: self.config.sender.clone(),
            recipients: self.config.recipients.clone(),
            subject,
            body,
            headers: self.config.headers.clone(),
        })
    }
}

impl ChainNode for MailSender {
    fn handle(&self, exception: &Exception, context: &mut DataHolder) -> Result<()> {
        let mail = self.compose(context)?;

        if let Err(e) = self.transport.send(&mail) {
            warn!(kind = exception.kind(), error = %e, "mail transport failed");
            return Err(e.into());
        }

        debug!(
            kind = exception.kind(),
            recipients = mail.recipients.len(),
            "exception mailed"
        );

        self.next.forward(exception, context)
    }

    fn set_next(&mut self, next: Box<dyn ChainNode>) {
        self.next.set(next);
    }

    fn next(&self) -> Option<&dyn ChainNode> {
        self.next.get()
    }

    fn name(&self) -> &str {
        "MailSender"
    }
}
