use serde_json::Value;

use crate::core::error::EncodeError;

/// Turns a payload into a message body for a given format
pub trait ContentEncoder {
    fn supports_encoding(&self, format: &str) -> bool;

    fn encode(&self, payload: &Value, format: &str) -> Result<String, EncodeError>;
}

/// Pretty-printed JSON (`json`)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl ContentEncoder for JsonEncoder {
    fn supports_encoding(&self, format: &str) -> bool {
        format == "json"
    }

    fn encode(&self, payload: &Value, format: &str) -> Result<String, EncodeError> {
        if !self.supports_encoding(format) {
            return Err(EncodeError::Unsupported {
                format: format.to_string(),
            });
        }
        Ok(serde_json::to_string_pretty(payload)?)
    }
}

/// Plain `key: value` lines with keys sorted (`text`, `txt`)
///
/// Nested values are written as compact JSON. A non-object payload is written as
/// a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl TextEncoder {
    fn render(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl ContentEncoder for TextEncoder {
    fn supports_encoding(&self, format: &str) -> bool {
        matches!(format, "text" | "txt")
    }

    fn encode(&self, payload: &Value, format: &str) -> Result<String, EncodeError> {
        if !self.supports_encoding(format) {
            return Err(EncodeError::Unsupported {
                format: format.to_string(),
            });
        }

        let Value::Object(map) = payload else {
            return Ok(Self::render(payload));
        };

        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        Ok(entries
            .into_iter()
            .map(|(key, value)| format!("{}: {}", key, Self::render(value)))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Dispatches to the first registered encoder supporting the requested format
///
/// # Example
///
/// ```ignore
/// let serializer = Serializer::new()
///     .encoder(JsonEncoder)
///     .encoder(TextEncoder);
///
/// assert!(serializer.supports_encoding("txt"));
/// let body = serializer.encode(&context.to_value(), "json")?;
/// ```
#[derive(Default)]
pub struct Serializer {
    encoders: Vec<Box<dyn ContentEncoder>>,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            encoders: Vec::new(),
        }
    }

    /// Serializer with every built-in encoder registered
    pub fn with_defaults() -> Self {
        Self::new().encoder(JsonEncoder).encoder(TextEncoder)
    }

    /// Register an encoder (fluent API - consumes self)
    pub fn encoder<E: ContentEncoder + 'static>(mut self, encoder: E) -> Self {
        self.encoders.push(Box::new(encoder));
        self
    }

    fn find(&self, format: &str) -> Option<&dyn ContentEncoder> {
        self.encoders
            .iter()
            .find(|e| e.supports_encoding(format))
            .map(|e| e.as_ref())
    }
}

impl ContentEncoder for Serializer {
    fn supports_encoding(&self, format: &str) -> bool {
        self.find(format).is_some()
    }

    fn encode(&self, payload: &Value, format: &str) -> Result<String, EncodeError> {
        match self.find(format) {
            Some(encoder) => encoder.encode(payload, format),
            None => Err(EncodeError::Unsupported {
                format: format.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_encoder_sorts_keys() {
        let payload = json!({"subject": "Hey!", "code": 3, "extra": null});
        let body = TextEncoder.encode(&payload, "text").unwrap();

        assert_eq!(body, "code: 3\nextra: \nsubject: Hey!");
    }

    #[test]
    fn json_encoder_round_trips_payload() {
        let payload = json!({"exception": {"class": "RuntimeException"}});
        let body = JsonEncoder.encode(&payload, "json").unwrap();

        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), payload);
    }

    #[test]
    fn serializer_dispatches_by_format() {
        let serializer = Serializer::with_defaults();

        assert!(serializer.supports_encoding("json"));
        assert!(serializer.supports_encoding("txt"));
        assert!(!serializer.supports_encoding("html"));
        assert_eq!(serializer.encode(&json!({}), "txt").unwrap(), "");
        assert!(matches!(
            serializer.encode(&json!({}), "html"),
            Err(EncodeError::Unsupported { .. })
        ));
    }
}
