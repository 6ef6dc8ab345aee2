/// Notify demo: filter exceptions by class and "mail" the survivors to stdout
///
/// Run with `RUST_LOG=debug cargo run --example notify_demo` to watch each node's
/// decisions.

use std::sync::Arc;

use exception_chains::core::error::TransportError;
use exception_chains::prelude::*;
use tracing_subscriber::EnvFilter;

/// Transport that prints the mail instead of delivering it
struct StdoutTransport;

impl MailTransport for StdoutTransport {
    fn send(&self, mail: &Mail) -> Result<(), TransportError> {
        println!("{}", "-".repeat(70));
        println!("From:    {}", mail.sender);
        println!("To:      {}", mail.recipients.join(", "));
        println!("Subject: {}", mail.subject.as_deref().unwrap_or(""));
        for (name, value) in &mail.headers {
            println!("{}: {}", name, value);
        }
        println!();
        println!("{}", mail.body.as_deref().unwrap_or(""));
        Ok(())
    }
}

fn main() -> Result<(), ChainError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Arc::new(TypeRegistry::standard());

    let mut class_filter = ExceptionClassFilter::new(registry);
    class_filter
        .allow("Exception")?
        .deny("LogicException")?
        .allow("InvalidArgumentException")?;

    let configuration = DataHolder::from_json(
        r#"{
            "sender": "alerts@example.com",
            "recipients": ["ops@example.com", "oncall@example.com"],
            "format": "text",
            "subject": "Unhandled exception",
            "headers": {"X-Priority": "1"}
        }"#,
    )?;
    let sender =
        MailSender::from_data_holder(StdoutTransport, Serializer::with_defaults(), &configuration)?;

    let chain = ExceptionChain::builder()
        .node(LogNode::new(LogLevel::Info))
        .node(FilterNode::new(class_filter))
        .node(SubjectProvider::new("[demo] {class}: {message}"))
        .node(ExceptionInfoProvider::new())
        .node(sender)
        .build();

    let exceptions = [
        Exception::new("RuntimeException", "disk full").with_code(28),
        Exception::new("DomainException", "value outside domain"),
        Exception::new("InvalidArgumentException", "negative amount"),
        Exception::new("BadMethodCallException", "no such method"),
    ];

    for exception in &exceptions {
        let mut context = DataHolder::new();
        chain.handle(exception, &mut context)?;
    }

    println!("{}", "-".repeat(70));
    Ok(())
}
