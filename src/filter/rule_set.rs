use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use crate::core::error::RuleError;
use crate::core::exception::Exception;
use crate::types::type_registry::TypeRegistry;

/// Outcome of a filter rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "ALLOW"),
            Decision::Deny => write!(f, "DENY"),
        }
    }
}

/// Allow/deny rules keyed by exception type
///
/// # Resolution
///
/// An exception resolves to the decision of the **nearest** type in its ancestry
/// (the exception's own kind first, then each parent toward the root) that has a
/// rule. Without any matching rule the decision is [`Decision::Deny`].
///
/// Because distance in the hierarchy decides, registration order never matters:
/// a broad category can be denied while one specific subtype is allowed.
///
/// Registering a rule for a type that already has one overwrites it.
///
/// # Example
///
/// ```ignore
/// let mut rules = RuleSet::new(Arc::new(TypeRegistry::standard()));
/// rules
///     .allow("Exception")?
///     .deny("LogicException")?
///     .allow("InvalidArgumentException")?;
///
/// assert_eq!(rules.resolve(&Exception::of_kind("RuntimeException")), Decision::Allow);
/// assert_eq!(rules.resolve(&Exception::of_kind("DomainException")), Decision::Deny);
/// assert_eq!(rules.resolve(&Exception::of_kind("InvalidArgumentException")), Decision::Allow);
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    registry: Arc<TypeRegistry>,
    rules: HashMap<String, Decision>,
}

impl RuleSet {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self {
            registry,
            rules: HashMap::new(),
        }
    }

    /// Let exceptions of `kind` (and its descendants without a closer rule) through
    pub fn allow(&mut self, kind: &str) -> Result<&mut Self, RuleError> {
        self.insert(kind, Decision::Allow)
    }

    /// Stop exceptions of `kind` (and its descendants without a closer rule)
    pub fn deny(&mut self, kind: &str) -> Result<&mut Self, RuleError> {
        self.insert(kind, Decision::Deny)
    }

    fn insert(&mut self, kind: &str, decision: Decision) -> Result<&mut Self, RuleError> {
        if !self.registry.contains(kind) {
            return Err(RuleError::InvalidRule {
                name: kind.to_string(),
            });
        }
        if !self.registry.is_exception_type(kind) {
            return Err(RuleError::TypeNotASubtype {
                name: kind.to_string(),
                root: self.registry.root().to_string(),
            });
        }

        self.rules.insert(kind.to_string(), decision);
        Ok(self)
    }

    /// Decision for the exception's nearest ancestor-or-self with a rule
    pub fn resolve(&self, exception: &Exception) -> Decision {
        self.registry
            .ancestors(exception.kind())
            .find_map(|kind| self.rules.get(kind).copied())
            .unwrap_or(Decision::Deny)
    }

    /// The rule registered for exactly `kind`, ignoring ancestors
    pub fn rule_for(&self, kind: &str) -> Option<Decision> {
        self.rules.get(kind).copied()
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }
}
