//! Typed configuration for [`MailSender`](crate::sender::mail_sender::MailSender).

use hashbrown::HashMap;
use serde_json::Value;

use crate::core::data_holder::DataHolder;
use crate::core::error::ConfigError;
use crate::sender::address::{describe, is_valid_address, is_valid_address_str};

/// Mail headers keyed by header name
pub type Headers = HashMap<String, String>;

/// Mail sender configuration
///
/// Recognised keys when loaded from a [`DataHolder`]:
///
/// * `sender` - required, a single valid address
/// * `recipients` - required, a non-empty list of valid addresses
/// * `format` - optional, passed to the encoder to build the body
/// * `subject` - optional static subject, used when the context has none
/// * `headers` - optional object of string values, defaults to empty
#[derive(Debug, Clone, PartialEq)]
pub struct SenderConfig {
    pub sender: String,
    pub recipients: Vec<String>,
    pub format: Option<String>,
    pub subject: Option<String>,
    pub headers: Headers,
}

impl SenderConfig {
    /// Build a configuration from typed values
    ///
    /// Nothing is validated until [`validate`](Self::validate) runs, which
    /// `MailSender::new` always does.
    pub fn new(sender: &str, recipients: &[&str]) -> Self {
        Self {
            sender: sender.to_string(),
            recipients: recipients.iter().map(|r| r.to_string()).collect(),
            format: None,
            subject: None,
            headers: Headers::new(),
        }
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Read and validate a configuration bag
    ///
    /// Checks run in order: sender, recipients list, each recipient. The first
    /// failure is returned.
    pub fn from_data_holder(configuration: &DataHolder) -> Result<Self, ConfigError> {
        let sender = match configuration.get("sender") {
            Some(Value::String(s)) if is_valid_address_str(s) => s.clone(),
            other => {
                return Err(ConfigError::InvalidAddress {
                    field: "sender".to_string(),
                    value: other.map(describe).unwrap_or_else(|| "null".to_string()),
                });
            }
        };

        let recipients = match configuration.get("recipients") {
            None => return Err(ConfigError::EmptyRecipients),
            Some(Value::Array(list)) if list.is_empty() => {
                return Err(ConfigError::EmptyRecipients);
            }
            Some(Value::Array(list)) => list
                .iter()
                .map(|entry| match entry {
                    Value::String(s) if is_valid_address(entry) => Ok(s.clone()),
                    other => Err(ConfigError::InvalidAddress {
                        field: "recipient".to_string(),
                        value: describe(other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ConfigError::InvalidAddress {
                    field: "recipient".to_string(),
                    value: describe(other),
                });
            }
        };

        Ok(Self {
            sender,
            recipients,
            format: optional_string(configuration, "format")?,
            subject: optional_string(configuration, "subject")?,
            headers: headers(configuration)?,
        })
    }

    /// Check the sender and every recipient
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_address_str(&self.sender) {
            return Err(ConfigError::InvalidAddress {
                field: "sender".to_string(),
                value: self.sender.clone(),
            });
        }

        if self.recipients.is_empty() {
            return Err(ConfigError::EmptyRecipients);
        }

        if let Some(invalid) = self.recipients.iter().find(|r| !is_valid_address_str(r)) {
            return Err(ConfigError::InvalidAddress {
                field: "recipient".to_string(),
                value: invalid.clone(),
            });
        }

        Ok(())
    }
}

fn optional_string(configuration: &DataHolder, key: &str) -> Result<Option<String>, ConfigError> {
    match configuration.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a string, got `{}`", other),
        }),
    }
}

fn headers(configuration: &DataHolder) -> Result<Headers, ConfigError> {
    let map = match configuration.get("headers") {
        None | Some(Value::Null) => return Ok(Headers::new()),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(ConfigError::InvalidValue {
                key: "headers".to_string(),
                message: format!("expected an object, got `{}`", other),
            });
        }
    };

    map.iter()
        .map(|(name, value)| match value {
            Value::String(v) => Ok((name.clone(), v.clone())),
            other => Err(ConfigError::InvalidValue {
                key: format!("headers.{}", name),
                message: format!("expected a string, got `{}`", other),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_all_recognised_keys() {
        let mut configuration = DataHolder::new();
        configuration.set("sender", "valid@sender.com");
        configuration.set("recipients", json!(["john@doe.com"]));
        configuration.set("format", "html");
        configuration.set("subject", "Static");
        configuration.set("headers", json!({"BB": "support@site.com"}));

        let config = SenderConfig::from_data_holder(&configuration).unwrap();

        assert_eq!(
            config,
            SenderConfig::new("valid@sender.com", &["john@doe.com"])
                .with_format("html")
                .with_subject("Static")
                .with_header("BB", "support@site.com")
        );
    }

    #[test]
    fn missing_sender_is_an_invalid_address() {
        let configuration = DataHolder::new();
        assert!(matches!(
            SenderConfig::from_data_holder(&configuration),
            Err(ConfigError::InvalidAddress { field, .. }) if field == "sender"
        ));
    }

    #[test]
    fn missing_recipients_count_as_empty() {
        let mut configuration = DataHolder::new();
        configuration.set("sender", "valid@sender.com");

        assert_eq!(
            SenderConfig::from_data_holder(&configuration),
            Err(ConfigError::EmptyRecipients)
        );
    }

    #[test]
    fn recipients_must_be_a_list() {
        let mut configuration = DataHolder::new();
        configuration.set("sender", "valid@sender.com");
        configuration.set("recipients", "john@doe.com");

        assert!(matches!(
            SenderConfig::from_data_holder(&configuration),
            Err(ConfigError::InvalidAddress { field, .. }) if field == "recipient"
        ));
    }

    #[test]
    fn header_values_must_be_strings() {
        let mut configuration = DataHolder::new();
        configuration.set("sender", "valid@sender.com");
        configuration.set("recipients", json!(["john@doe.com"]));
        configuration.set("headers", json!({"X-Priority": 1}));

        assert!(matches!(
            SenderConfig::from_data_holder(&configuration),
            Err(ConfigError::InvalidValue { key, .. }) if key == "headers.X-Priority"
        ));
    }

    #[test]
    fn validate_checks_typed_values() {
        assert!(SenderConfig::new("valid@sender.com", &["john@doe.com"]).validate().is_ok());
        assert_eq!(
            SenderConfig::new("valid@sender.com", &[]).validate(),
            Err(ConfigError::EmptyRecipients)
        );
        assert!(SenderConfig::new("john@", &["john@doe.com"]).validate().is_err());
        assert!(
            SenderConfig::new("valid@sender.com", &["john@doe.com", "@domain.com"])
                .validate()
                .is_err()
        );
    }
}
