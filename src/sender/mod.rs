/// Mail address syntax checks
pub mod address;

/// Typed, validated sender configuration
pub mod config;

/// Body encoders and the format-dispatching serializer
pub mod encoder;

/// Transport capability and the outgoing message type
pub mod transport;

/// Chain node that mails exceptions
pub mod mail_sender;

/// SMTP transport adapter
#[cfg(feature = "smtp")]
pub mod smtp;
