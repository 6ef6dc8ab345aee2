use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("address pattern is valid")
});

/// Syntax check for a single `local@domain.tld` mail address
///
/// Rejects blank strings, surrounding whitespace, a missing local or domain part,
/// empty domain labels, and top-level domains shorter than two letters.
pub fn is_valid_address_str(address: &str) -> bool {
    if !ADDRESS.is_match(address) {
        return false;
    }

    // The pattern allows dots anywhere in the local part
    let local = address.split('@').next().unwrap_or_default();
    !(local.starts_with('.') || local.ends_with('.') || local.contains(".."))
}

/// Address check over a dynamic configuration value
///
/// Only strings can be addresses; numbers, booleans, null, objects and lists are
/// always invalid.
pub fn is_valid_address(value: &Value) -> bool {
    match value {
        Value::String(address) => is_valid_address_str(address),
        _ => false,
    }
}

/// Render a configuration value for an error message
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
