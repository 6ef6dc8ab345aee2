use tracing::debug;

use crate::core::chain_node::{ChainNode, Successor};
use crate::core::data_holder::DataHolder;
use crate::core::error::Result;
use crate::core::exception::Exception;
use crate::filter::exception_filter::ExceptionFilter;

/// Chain node that stops processing unless its filter lets the exception pass
///
/// A blocked exception never reaches the successor and causes no side effect.
/// A passing exception is forwarded with the same context; the filter itself never
/// mutates the context.
///
/// # Example
///
/// ```ignore
/// let mut class_filter = ExceptionClassFilter::new(registry);
/// class_filter.allow("Exception")?.deny("LogicException")?;
///
/// let chain = ExceptionChain::builder()
///     .node(FilterNode::new(class_filter))
///     .node(mail_sender)
///     .build();
/// ```
pub struct FilterNode<F: ExceptionFilter> {
    filter: F,
    name: String,
    next: Successor,
}

impl<F: ExceptionFilter> FilterNode<F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            name: "FilterNode".to_string(),
            next: Successor::new(),
        }
    }

    /// Override the name reported in logs
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn filter(&self, exception: &Exception) -> bool {
        self.filter.filter(exception)
    }

    pub fn inner(&self) -> &F {
        &self.filter
    }

    pub fn inner_mut(&mut self) -> &mut F {
        &mut self.filter
    }
}

impl<F: ExceptionFilter> ChainNode for FilterNode<F> {
    fn handle(&self, exception: &Exception, context: &mut DataHolder) -> Result<()> {
        if !self.filter(exception) {
            debug!(node = %self.name, kind = exception.kind(), "exception blocked");
            return Ok(());
        }

        debug!(node = %self.name, kind = exception.kind(), "exception passed");
        self.next.forward(exception, context)
    }

    fn set_next(&mut self, next: Box<dyn ChainNode>) {
        self.next.set(next);
    }

    fn next(&self) -> Option<&dyn ChainNode> {
        self.next.get()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
