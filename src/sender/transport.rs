use crate::core::error::TransportError;
use crate::sender::config::Headers;

/// A fully resolved outgoing message
#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub headers: Headers,
}

/// Delivers mail on behalf of a [`MailSender`](crate::sender::mail_sender::MailSender)
///
/// Any error returned is opaque to the chain: it is propagated unchanged and
/// never retried.
pub trait MailTransport {
    fn send(&self, mail: &Mail) -> Result<(), TransportError>;
}
