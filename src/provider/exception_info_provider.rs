use serde_json::Value;

use crate::core::chain_node::{ChainNode, Successor};
use crate::core::data_holder::DataHolder;
use crate::core::error::Result;
use crate::core::exception::Exception;

/// Chain node that stores the exception's details under `exception` in the context
///
/// Causes are nested under `previous`, outermost first, so an encoder downstream
/// renders the whole cause chain in the mail body.
pub struct ExceptionInfoProvider {
    key: String,
    next: Successor,
}

impl ExceptionInfoProvider {
    pub fn new() -> Self {
        Self {
            key: "exception".to_string(),
            next: Successor::new(),
        }
    }

    /// Store the details under a different context key
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn describe(exception: &Exception) -> Value {
        let mut value = exception.to_value();
        if let (Some(previous), Value::Object(map)) = (exception.previous(), &mut value) {
            map.insert("previous".to_string(), Self::describe(previous));
        }
        value
    }
}

impl ChainNode for ExceptionInfoProvider {
    fn handle(&self, exception: &Exception, context: &mut DataHolder) -> Result<()> {
        context.set(&self.key, Self::describe(exception));
        self.next.forward(exception, context)
    }

    fn set_next(&mut self, next: Box<dyn ChainNode>) {
        self.next.set(next);
    }

    fn next(&self) -> Option<&dyn ChainNode> {
        self.next.get()
    }

    fn name(&self) -> &str {
        "ExceptionInfoProvider"
    }
}

impl Default for ExceptionInfoProvider {
    fn default() -> Self {
        Self::new()
    }
}
