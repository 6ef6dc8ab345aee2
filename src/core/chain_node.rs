use crate::core::data_holder::DataHolder;
use crate::core::error::Result;
use crate::core::exception::Exception;

/// A link in an exception processing chain
///
/// Each node inspects the exception, may act on it, and decides whether the
/// successor gets to see it. Nodes are stateless between calls; the chain's only
/// state is which nodes are wired together.
///
/// # Propagation
///
/// * A node without a successor simply stops; this is not an error
/// * An `Err` returned from any node unwinds through every open `handle` frame,
///   so nodes further down the chain are never invoked
///
/// # Example
///
/// ```ignore
/// let mut filter = FilterNode::new(class_filter);
/// filter.set_next(Box::new(mail_sender));
///
/// let mut context = DataHolder::new();
/// filter.handle(&Exception::of_kind("RuntimeException"), &mut context)?;
/// ```
pub trait ChainNode {
    /// Process the exception, then conditionally delegate to the successor
    fn handle(&self, exception: &Exception, context: &mut DataHolder) -> Result<()>;

    /// Assign or replace the successor
    fn set_next(&mut self, next: Box<dyn ChainNode>);

    fn next(&self) -> Option<&dyn ChainNode>;

    /// Name used in log output
    fn name(&self) -> &str;
}

/// Successor slot shared by every node implementation
///
/// Nodes embed a `Successor` and call [`forward`](Self::forward) once they decide
/// the exception should continue down the chain.
#[derive(Default)]
pub struct Successor {
    node: Option<Box<dyn ChainNode>>,
}

impl Successor {
    pub fn new() -> Self {
        Self { node: None }
    }

    pub fn set(&mut self, node: Box<dyn ChainNode>) {
        self.node = Some(node);
    }

    pub fn get(&self) -> Option<&dyn ChainNode> {
        self.node.as_deref()
    }

    /// Detach the successor, leaving the slot empty
    pub fn take(&mut self) -> Option<Box<dyn ChainNode>> {
        self.node.take()
    }

    /// Hand the same exception and context to the successor, if any
    pub fn forward(&self, exception: &Exception, context: &mut DataHolder) -> Result<()> {
        match &self.node {
            Some(node) => node.handle(exception, context),
            None => Ok(()),
        }
    }
}
