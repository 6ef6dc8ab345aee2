use crate::core::chain_node::{ChainNode, Successor};
use crate::core::data_holder::DataHolder;
use crate::core::error::Result;
use crate::core::exception::Exception;

/// Chain node that writes a `subject` into the context for downstream senders
///
/// The template understands `{class}`, `{message}` and `{code}`. An existing
/// `subject` in the context is left alone unless overwriting is enabled.
///
/// # Example
///
/// ```ignore
/// let chain = ExceptionChain::builder()
///     .node(SubjectProvider::new("[prod] {class}: {message}"))
///     .node(mail_sender)
///     .build();
/// ```
pub struct SubjectProvider {
    template: String,
    overwrite: bool,
    next: Successor,
}

impl SubjectProvider {
    pub const DEFAULT_TEMPLATE: &'static str = "[{class}] {message}";

    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
            overwrite: false,
            next: Successor::new(),
        }
    }

    /// Replace a subject set by an earlier node
    pub fn overwrite(mut self, enabled: bool) -> Self {
        self.overwrite = enabled;
        self
    }

    pub fn render(&self, exception: &Exception) -> String {
        self.template
            .replace("{class}", exception.kind())
            .replace("{message}", exception.message())
            .replace("{code}", &exception.code().to_string())
    }
}

impl ChainNode for SubjectProvider {
    fn handle(&self, exception: &Exception, context: &mut DataHolder) -> Result<()> {
        if self.overwrite || !context.has("subject") {
            context.set("subject", self.render(exception));
        }
        self.next.forward(exception, context)
    }

    fn set_next(&mut self, next: Box<dyn ChainNode>) {
        self.next.set(next);
    }

    fn next(&self) -> Option<&dyn ChainNode> {
        self.next.get()
    }

    fn name(&self) -> &str {
        "SubjectProvider"
    }
}

impl Default for SubjectProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TEMPLATE)
    }
}
