pub mod chain_node;
pub mod data_holder;
pub mod error;
pub mod exception;
pub mod exception_chain;
