//! The root of the interface model.

use indexmap::IndexMap;
use serde::Serialize;

use crate::Enum;

/// A parsed interface description, ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// Interface name, used to derive the header file name.
    pub name: String,
    /// C++ namespace path such as `A::B::C`.
    pub namespace: Option<String>,
    /// Enumerations keyed by their source key, in declaration order.
    pub enums: IndexMap<String, Enum>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            enums: IndexMap::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_enum(mut self, key: impl Into<String>, e: Enum) -> Self {
        self.enums.insert(key.into(), e);
        self
    }

    /// Total number of enum elements across all enums.
    pub fn element_count(&self) -> usize {
        self.enums.values().map(|e| e.elements.len()).sum()
    }
}
