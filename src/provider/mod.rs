/// Writes a templated `subject` into the context
pub mod subject_provider;

/// Writes the exception and its causes into the context
pub mod exception_info_provider;
