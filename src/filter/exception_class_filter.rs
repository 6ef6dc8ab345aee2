use std::sync::Arc;

use crate::core::error::RuleError;
use crate::core::exception::Exception;
use crate::filter::exception_filter::ExceptionFilter;
use crate::filter::rule_set::{Decision, RuleSet};
use crate::types::type_registry::TypeRegistry;

/// Filter that passes exceptions according to their class hierarchy
///
/// Denies by default; see [`RuleSet`] for how rules are resolved.
///
/// # Example
///
/// ```ignore
/// let mut filter = ExceptionClassFilter::new(Arc::new(TypeRegistry::standard()));
/// filter.allow("Exception")?;
/// filter.deny("LogicException")?;
///
/// let node = FilterNode::new(filter);
/// ```
#[derive(Debug, Clone)]
pub struct ExceptionClassFilter {
    rules: RuleSet,
}

impl ExceptionClassFilter {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self {
            rules: RuleSet::new(registry),
        }
    }

    /// Build a filter from an existing rule set
    pub fn from_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn allow(&mut self, kind: &str) -> Result<&mut Self, RuleError> {
        self.rules.allow(kind)?;
        Ok(self)
    }

    pub fn deny(&mut self, kind: &str) -> Result<&mut Self, RuleError> {
        self.rules.deny(kind)?;
        Ok(self)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl ExceptionFilter for ExceptionClassFilter {
    fn filter(&self, exception: &Exception) -> bool {
        self.rules.resolve(exception) == Decision::Allow
    }
}
