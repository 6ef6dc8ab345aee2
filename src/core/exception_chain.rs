use tracing::debug;

use crate::core::chain_node::ChainNode;
use crate::core::data_holder::DataHolder;
use crate::core::error::Result;
use crate::core::exception::Exception;

/// Fluent builder that wires nodes into a singly-linked chain
///
/// # Node Order
///
/// Nodes are linked in the order they are added (first added → head of the chain).
///
/// # Example
///
/// ```ignore
/// let chain = ExceptionChain::builder()
///     .node(LogNode::new(LogLevel::Warn))       // Runs 1st
///     .node(FilterNode::new(class_filter))      // Runs 2nd
///     .node(mail_sender)                        // Runs 3rd, only if the filter passed
///     .build();
///
/// let mut context = DataHolder::new();
/// chain.handle(&exception, &mut context)?;
/// ```
#[derive(Default)]
pub struct ChainBuilder {
    nodes: Vec<Box<dyn ChainNode>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node to the chain (fluent API - consumes self)
    pub fn node<N: ChainNode + 'static>(mut self, node: N) -> Self {
        self.nodes.push(Box::new(node));
        self
    }

    /// Append an already boxed node (mutable reference API)
    pub fn add_node(&mut self, node: Box<dyn ChainNode>) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Link every node to the one added after it
    ///
    /// A successor previously set on any of the nodes is replaced, except on the
    /// last node, which keeps whatever successor it already had.
    pub fn build(self) -> ExceptionChain {
        let mut head: Option<Box<dyn ChainNode>> = None;

        for mut node in self.nodes.into_iter().rev() {
            if let Some(next) = head.take() {
                node.set_next(next);
            }
            head = Some(node);
        }

        ExceptionChain { head }
    }
}

/// A wired chain, ready to be invoked repeatedly
pub struct ExceptionChain {
    head: Option<Box<dyn ChainNode>>,
}

impl ExceptionChain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Wrap a chain whose nodes were wired by hand
    pub fn from_head(head: Box<dyn ChainNode>) -> Self {
        Self { head: Some(head) }
    }

    pub fn head(&self) -> Option<&dyn ChainNode> {
        self.head.as_deref()
    }

    /// Number of nodes reachable from the head
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.head();
        while let Some(node) = current {
            count += 1;
            current = node.next();
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Run the exception through the chain, starting at the head
    ///
    /// Blocks until every downstream node has finished. The first error aborts the
    /// rest of the chain and is returned unchanged.
    pub fn handle(&self, exception: &Exception, context: &mut DataHolder) -> Result<()> {
        match &self.head {
            Some(head) => {
                debug!(exception = %exception, head = head.name(), "handling exception");
                head.handle(exception, context)
            }
            None => Ok(()),
        }
    }
}
