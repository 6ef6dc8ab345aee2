//! Exception Chains - chain-of-responsibility exception processing
//!
//! An exception is passed through an ordered chain of nodes. Each node may
//! inspect it, enrich the shared context bag, stop the chain, or produce a side
//! effect such as mailing a report.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use exception_chains::prelude::*;
//!
//! let mut class_filter = ExceptionClassFilter::new(Arc::new(TypeRegistry::standard()));
//! class_filter.allow("Exception")?.deny("LogicException")?;
//!
//! let config = SenderConfig::new("alerts@example.com", &["ops@example.com"]);
//!
//! let chain = ExceptionChain::builder()
//!     .node(FilterNode::new(class_filter))
//!     .node(SubjectProvider::default())
//!     .node(MailSender::new(transport, Serializer::with_defaults(), config)?)
//!     .build();
//!
//! let mut context = DataHolder::new();
//! chain.handle(&Exception::new("RuntimeException", "disk full"), &mut context)?;
//! ```

pub mod core;
pub mod filter;
pub mod logging;
pub mod provider;
pub mod sender;
pub mod types;

// Convenience re-exports
pub use crate::core::chain_node::{ChainNode, Successor};
pub use crate::core::data_holder::DataHolder;
pub use crate::core::error::{ChainError, Result};
pub use crate::core::exception::Exception;
pub use crate::core::exception_chain::{ChainBuilder, ExceptionChain};
pub use crate::filter::exception_class_filter::ExceptionClassFilter;
pub use crate::filter::exception_filter::{CallbackFilter, ExceptionFilter};
pub use crate::filter::filter_node::FilterNode;
pub use crate::filter::rule_set::{Decision, RuleSet};
pub use crate::sender::mail_sender::MailSender;
pub use crate::types::type_registry::TypeRegistry;

pub mod prelude {
    pub use crate::core::chain_node::ChainNode;
    pub use crate::core::data_holder::DataHolder;
    pub use crate::core::error::ChainError;
    pub use crate::core::exception::Exception;
    pub use crate::core::exception_chain::ExceptionChain;
    pub use crate::filter::exception_class_filter::ExceptionClassFilter;
    pub use crate::filter::filter_node::FilterNode;
    pub use crate::logging::log_node::{LogLevel, LogNode};
    pub use crate::provider::exception_info_provider::ExceptionInfoProvider;
    pub use crate::provider::subject_provider::SubjectProvider;
    pub use crate::sender::config::SenderConfig;
    pub use crate::sender::encoder::{ContentEncoder, Serializer};
    pub use crate::sender::mail_sender::MailSender;
    pub use crate::sender::transport::{Mail, MailTransport};
    pub use crate::types::type_registry::TypeRegistry;
}
