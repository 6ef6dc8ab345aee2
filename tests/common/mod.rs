//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use exception_chains::core::error::{EncodeError, TransportError};
use exception_chains::prelude::*;
use exception_chains::Successor;
use serde_json::Value;

// ============================================================================
// TRANSPORTS
// ============================================================================

/// Transport that records every mail instead of sending it
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<Mail>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Mail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl MailTransport for RecordingTransport {
    fn send(&self, mail: &Mail) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

/// Transport that always fails, counting attempts
#[derive(Clone, Default)]
pub struct FailingTransport {
    attempts: Arc<Mutex<usize>>,
}

impl FailingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl MailTransport for FailingTransport {
    fn send(&self, _mail: &Mail) -> Result<(), TransportError> {
        *self.attempts.lock().unwrap() += 1;
        Err(TransportError::new("connection refused"))
    }
}

// ============================================================================
// ENCODERS
// ============================================================================

/// Encoder supporting a fixed set of formats, returning a canned body
#[derive(Clone)]
pub struct FakeEncoder {
    formats: Vec<String>,
    body: String,
    supports_calls: Arc<Mutex<Vec<String>>>,
    payloads: Arc<Mutex<Vec<(Value, String)>>>,
}

impl FakeEncoder {
    pub fn supporting(formats: &[&str], body: &str) -> Self {
        Self {
            formats: formats.iter().map(|f| f.to_string()).collect(),
            body: body.to_string(),
            supports_calls: Arc::new(Mutex::new(Vec::new())),
            payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn supporting_nothing() -> Self {
        Self::supporting(&[], "")
    }

    pub fn supports_calls(&self) -> Vec<String> {
        self.supports_calls.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<(Value, String)> {
        self.payloads.lock().unwrap().clone()
    }
}

impl ContentEncoder for FakeEncoder {
    fn supports_encoding(&self, format: &str) -> bool {
        self.supports_calls.lock().unwrap().push(format.to_string());
        self.formats.iter().any(|f| f == format)
    }

    fn encode(&self, payload: &Value, format: &str) -> Result<String, EncodeError> {
        self.payloads
            .lock()
            .unwrap()
            .push((payload.clone(), format.to_string()));
        Ok(self.body.clone())
    }
}

// ============================================================================
// NODES
// ============================================================================

/// What a recording node saw on one `handle` call
#[derive(Debug, Clone)]
pub struct Visit {
    pub exception: Exception,
    pub context: Value,
}

/// Chain node that records each visit, optionally writes to the context, and forwards
pub struct RecordingNode {
    name: String,
    visits: Arc<Mutex<Vec<Visit>>>,
    write: Option<(String, Value)>,
    next: Successor,
}

impl RecordingNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            visits: Arc::new(Mutex::new(Vec::new())),
            write: None,
            next: Successor::new(),
        }
    }

    /// Set `key` to `value` in the context on every visit
    pub fn writing(mut self, key: &str, value: Value) -> Self {
        self.write = Some((key.to_string(), value));
        self
    }

    /// Handle for inspecting visits after the node is moved into a chain
    pub fn visits(&self) -> Arc<Mutex<Vec<Visit>>> {
        Arc::clone(&self.visits)
    }
}

impl ChainNode for RecordingNode {
    fn handle(&self, exception: &Exception, context: &mut DataHolder) -> exception_chains::Result<()> {
        self.visits.lock().unwrap().push(Visit {
            exception: exception.clone(),
            context: context.to_value(),
        });
        if let Some((key, value)) = &self.write {
            context.set(key, value.clone());
        }
        self.next.forward(exception, context)
    }

    fn set_next(&mut self, next: Box<dyn ChainNode>) {
        self.next.set(next);
    }

    fn next(&self) -> Option<&dyn ChainNode> {
        self.next.get()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn full_configuration() -> DataHolder {
    let mut configuration = DataHolder::new();
    configuration.set("format", "html");
    configuration.set("sender", "valid@sender.com");
    configuration.set("subject", "Static subject from config");
    configuration.set("recipients", serde_json::json!(["john@doe.com"]));
    configuration.set("headers", serde_json::json!({"BB": "support@site.com"}));
    configuration
}

/// Values that must never be accepted as a mail address
pub fn invalid_addresses() -> Vec<Value> {
    use serde_json::json;

    vec![
        json!(" "),
        json!(""),
        json!("john@"),
        json!("name@domain.r"),
        json!("name@.ru"),
        json!("@domain.com"),
        json!(1),
        json!(1.2),
        json!(false),
        json!(true),
        json!(null),
        json!({}),
        json!([]),
    ]
}
