use tracing::{debug, error, info, warn};

use crate::core::chain_node::{ChainNode, Successor};
use crate::core::data_holder::DataHolder;
use crate::core::error::Result;
use crate::core::exception::Exception;

/// Logging levels for the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Chain node that logs every exception passing through, then forwards it
///
/// Events go through `tracing`; installing a subscriber is up to the application.
///
/// # Example
///
/// ```ignore
/// use exception_chains::logging::log_node::{LogNode, LogLevel};
///
/// let chain = ExceptionChain::builder()
///     .node(LogNode::new(LogLevel::Warn))
///     .node(FilterNode::new(class_filter))
///     .build();
/// ```
pub struct LogNode {
    level: LogLevel,
    log_context: bool,
    next: Successor,
}

impl LogNode {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            log_context: false,
            next: Successor::new(),
        }
    }

    pub fn error() -> Self {
        Self::new(LogLevel::Error)
    }

    /// Also log the keys present in the context bag
    pub fn with_context_logging(mut self, enabled: bool) -> Self {
        self.log_context = enabled;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, exception: &Exception, context: &DataHolder) {
        let keys = if self.log_context {
            let mut keys: Vec<_> = context.keys().collect();
            keys.sort_unstable();
            keys.join(",")
        } else {
            String::new()
        };

        let kind = exception.kind();
        let code = exception.code();
        match self.level {
            LogLevel::Debug => debug!(kind, code, context = %keys, "{}", exception),
            LogLevel::Info => info!(kind, code, context = %keys, "{}", exception),
            LogLevel::Warn => warn!(kind, code, context = %keys, "{}", exception),
            LogLevel::Error => error!(kind, code, context = %keys, "{}", exception),
        }
    }
}

impl ChainNode for LogNode {
    fn handle(&self, exception: &Exception, context: &mut DataHolder) -> Result<()> {
        self.log(exception, context);
        self.next.forward(exception, context)
    }

    fn set_next(&mut self, next: Box<dyn ChainNode>) {
        self.next.set(next);
    }

    fn next(&self) -> Option<&dyn ChainNode> {
        self.next.get()
    }

    fn name(&self) -> &str {
        "LogNode"
    }
}

impl Default for LogNode {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}
