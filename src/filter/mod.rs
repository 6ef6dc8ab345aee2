/// Filter capability and closure-backed filter
pub mod exception_filter;

/// Allow/deny rule engine resolved over the type hierarchy
pub mod rule_set;

/// Class-hierarchy filter built on a rule set
pub mod exception_class_filter;

/// Chain node that stops or forwards based on a filter
pub mod filter_node;
