/// Chain node that logs exceptions through `tracing`
pub mod log_node;
