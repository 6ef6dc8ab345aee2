use std::fmt;

use serde_json::{Value, json};

/// An exception travelling through a chain
///
/// `kind` is the exception's type identity. It is resolved against a
/// [`TypeRegistry`](crate::types::type_registry::TypeRegistry) by filters; the message
/// never takes part in filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Exception {
    kind: String,
    message: String,
    code: i64,
    previous: Option<Box<Exception>>,
}

impl Exception {
    pub fn new(kind: &str, message: &str) -> Self {
        Self {
            kind: kind.to_string(),
            message: message.to_string(),
            code: 0,
            previous: None,
        }
    }

    /// Create an exception of the given kind with an empty message
    pub fn of_kind(kind: &str) -> Self {
        Self::new(kind, "")
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Attach the exception that caused this one
    pub fn with_previous(mut self, previous: Exception) -> Self {
        self.previous = Some(Box::new(previous));
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn previous(&self) -> Option<&Exception> {
        self.previous.as_deref()
    }

    /// `{ "class", "message", "code" }` snapshot used by providers and encoders
    pub fn to_value(&self) -> Value {
        json!({
            "class": self.kind,
            "message": self.message,
            "code": self.code,
        })
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}
