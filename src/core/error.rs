//! Error types for exception chains.

use std::error::Error as StdError;

/// Top-level error returned by chain nodes and their construction.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Type registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors raised while registering filter rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("Class not exists: `{name}`")]
    InvalidRule { name: String },

    #[error("Class `{name}` is not a subclass of `{root}`")]
    TypeNotASubtype { name: String, root: String },
}

/// Errors raised while building a type registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Type `{name}` is already registered")]
    Duplicate { name: String },

    #[error("Cannot register `{name}`: parent type `{parent}` is unknown")]
    UnknownParent { name: String, parent: String },
}

/// Node configuration errors. All of them are raised at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Given {field} `{value}` is not a valid email address")]
    InvalidAddress { field: String, value: String },

    #[error("Recipients list should not be empty")]
    EmptyRecipients,

    #[error("Format `{format}` is not supported by the encoder")]
    UnsupportedFormat { format: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Content encoding errors.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("No encoder supports format `{format}`")]
    Unsupported { format: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Opaque failure reported by a mail transport.
///
/// The chain never interprets it; it is propagated unchanged to the caller of `handle`.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(#[source] Box<dyn StdError + Send + Sync>);

impl TransportError {
    pub fn new<E: Into<Box<dyn StdError + Send + Sync>>>(error: E) -> Self {
        Self(error.into())
    }

    /// Borrow the underlying transport-specific error
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

/// Result type alias for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
