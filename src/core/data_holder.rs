use hashbrown::HashMap;
use serde_json::{Map, Value};

use crate::core::error::ConfigError;

/// String-keyed bag of dynamic values
///
/// Serves two roles in a chain run:
///
/// * **Configuration**: options handed to a node at construction time
/// * **Context**: data travelling alongside the exception through one `handle` call,
///   letting upstream nodes leave values (e.g. a `subject`) for downstream nodes
///
/// # Example
///
/// ```ignore
/// let mut context = DataHolder::new();
/// context.set("subject", "Hey! There is an error.");
///
/// assert!(context.has("subject"));
/// assert_eq!(context.get_str("subject"), Some("Hey! There is an error."));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataHolder {
    data: HashMap<String, Value>,
}

impl DataHolder {
    /// Create an empty holder
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Parse a holder from JSON text; the document must be an object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => Ok(Self::from(map)),
            Ok(other) => Err(ConfigError::InvalidValue {
                key: "<root>".to_string(),
                message: format!("expected a JSON object, got `{}`", other),
            }),
            Err(e) => Err(ConfigError::InvalidValue {
                key: "<root>".to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Set a value, replacing any previous value for the key
    pub fn set<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.data.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Get a copy of the value for `key`, or `default` when it is absent
    pub fn get_or<V: Into<Value>>(&self, key: &str, default: V) -> Value {
        self.data.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Get the value for `key` if it is present and a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Snapshot all entries as a JSON object (`{}` when empty)
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Value::Object(map)
    }
}

impl From<Map<String, Value>> for DataHolder {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            data: map.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_overwrites_and_get_or_falls_back() {
        let mut holder = DataHolder::new();
        holder.set("format", "html");
        holder.set("format", "json");

        assert_eq!(holder.get_str("format"), Some("json"));
        assert_eq!(holder.get_or("headers", json!({})), json!({}));
        assert_eq!(holder.len(), 1);
    }

    #[test]
    fn empty_holder_snapshots_to_empty_object() {
        assert_eq!(DataHolder::new().to_value(), json!({}));
    }

    #[test]
    fn from_json_requires_an_object() {
        let holder = DataHolder::from_json(r#"{"sender": "valid@sender.com", "recipients": []}"#)
            .unwrap();
        assert!(holder.has("sender"));
        assert_eq!(holder.get("recipients"), Some(&json!([])));

        assert!(DataHolder::from_json("[1, 2]").is_err());
        assert!(DataHolder::from_json("{not json").is_err());
    }
}
