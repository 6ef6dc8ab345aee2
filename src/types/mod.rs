/// Explicit type hierarchy used to resolve exception kinds
pub mod type_registry;
