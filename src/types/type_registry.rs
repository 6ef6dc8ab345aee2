use hashbrown::HashMap;

use crate::core::error::RegistryError;

/// A named type and its immediate parent (`None` for a root)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    pub parent: Option<String>,
}

/// Explicit, queryable type hierarchy
///
/// Every type has zero or one parent. One root is designated as the exception
/// root; filters only accept rules for that root and its descendants. Other roots
/// may be registered to describe types that exist but are not exceptions.
///
/// # Example
///
/// ```ignore
/// let mut registry = TypeRegistry::new("Exception");
/// registry.register("LogicException", "Exception")?;
/// registry.register("InvalidArgumentException", "LogicException")?;
/// registry.register_root("stdClass")?;
///
/// let path: Vec<_> = registry.ancestors("InvalidArgumentException").collect();
/// assert_eq!(path, ["InvalidArgumentException", "LogicException", "Exception"]);
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    root: String,
    types: HashMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create a registry containing only the designated exception root
    pub fn new(root: &str) -> Self {
        let mut types = HashMap::new();
        types.insert(
            root.to_string(),
            TypeDescriptor {
                name: root.to_string(),
                parent: None,
            },
        );

        Self {
            root: root.to_string(),
            types,
        }
    }

    /// Registry preloaded with the conventional exception hierarchy rooted at `Exception`
    pub fn standard() -> Self {
        const HIERARCHY: &[(&str, &str)] = &[
            ("ErrorException", "Exception"),
            ("LogicException", "Exception"),
            ("BadFunctionCallException", "LogicException"),
            ("BadMethodCallException", "BadFunctionCallException"),
            ("DomainException", "LogicException"),
            ("InvalidArgumentException", "LogicException"),
            ("LengthException", "LogicException"),
            ("OutOfRangeException", "LogicException"),
            ("RuntimeException", "Exception"),
            ("OutOfBoundsException", "RuntimeException"),
            ("OverflowException", "RuntimeException"),
            ("RangeException", "RuntimeException"),
            ("UnderflowException", "RuntimeException"),
            ("UnexpectedValueException", "RuntimeException"),
        ];

        let mut registry = Self::new("Exception");
        for (name, parent) in HIERARCHY {
            registry.insert(name, Some(parent));
        }
        registry.insert("stdClass", None);
        registry
    }

    /// Register `name` as a direct child of `parent`
    pub fn register(&mut self, name: &str, parent: &str) -> Result<&mut Self, RegistryError> {
        if self.types.contains_key(name) {
            return Err(RegistryError::Duplicate {
                name: name.to_string(),
            });
        }
        if !self.types.contains_key(parent) {
            return Err(RegistryError::UnknownParent {
                name: name.to_string(),
                parent: parent.to_string(),
            });
        }

        self.insert(name, Some(parent));
        Ok(self)
    }

    /// Register an additional, unrelated root type
    pub fn register_root(&mut self, name: &str) -> Result<&mut Self, RegistryError> {
        if self.types.contains_key(name) {
            return Err(RegistryError::Duplicate {
                name: name.to_string(),
            });
        }

        self.insert(name, None);
        Ok(self)
    }

    fn insert(&mut self, name: &str, parent: Option<&str>) {
        self.types.insert(
            name.to_string(),
            TypeDescriptor {
                name: name.to_string(),
                parent: parent.map(str::to_string),
            },
        );
    }

    /// The designated exception root
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn descriptor(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.types.get(name)?.parent.as_deref()
    }

    /// Walk from `name` (inclusive) toward its root, one level at a time
    ///
    /// Yields nothing when `name` is not registered.
    pub fn ancestors(&self, name: &str) -> Ancestors<'_> {
        let current = self.types.get(name).map(|d| d.name.as_str());
        Ancestors {
            registry: self,
            current,
        }
    }

    /// Whether `name` is the exception root or one of its descendants
    pub fn is_exception_type(&self, name: &str) -> bool {
        self.ancestors(name).any(|ancestor| ancestor == self.root)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Iterator over a type and its ancestors, nearest first
pub struct Ancestors<'a> {
    registry: &'a TypeRegistry,
    current: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.current?;
        self.current = self.registry.parent_of(name);
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestors_walk_toward_root() {
        let registry = TypeRegistry::standard();
        let path: Vec<_> = registry.ancestors("BadMethodCallException").collect();

        assert_eq!(
            path,
            [
                "BadMethodCallException",
                "BadFunctionCallException",
                "LogicException",
                "Exception"
            ]
        );
    }

    #[test]
    fn unknown_type_has_no_ancestors() {
        let registry = TypeRegistry::standard();
        assert_eq!(registry.ancestors("NotExistException").count(), 0);
        assert!(!registry.is_exception_type("NotExistException"));
    }

    #[test]
    fn unrelated_roots_are_not_exception_types() {
        let registry = TypeRegistry::standard();
        assert!(registry.contains("stdClass"));
        assert!(!registry.is_exception_type("stdClass"));
        assert!(registry.is_exception_type("Exception"));
        assert!(registry.is_exception_type("OverflowException"));
    }

    #[test]
    fn register_rejects_duplicates_and_unknown_parents() {
        let mut registry = TypeRegistry::new("Exception");
        registry.register("AppException", "Exception").unwrap();

        assert_eq!(
            registry.register("AppException", "Exception").unwrap_err(),
            RegistryError::Duplicate {
                name: "AppException".to_string()
            }
        );
        assert_eq!(
            registry.register("DbException", "Missing").unwrap_err(),
            RegistryError::UnknownParent {
                name: "DbException".to_string(),
                parent: "Missing".to_string()
            }
        );
        assert!(registry.register_root("Exception").is_err());
        assert_eq!(registry.parent_of("AppException"), Some("Exception"));
    }
}
