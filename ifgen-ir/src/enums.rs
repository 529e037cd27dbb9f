//! Enumerations and their elements.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Docs, Documented};

/// An enumeration in the interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enum {
    /// Display name.
    pub name: String,
    /// Identifier used instead of the display name when set.
    pub internal_name: Option<String>,
    /// Documentation metadata.
    pub docs: Docs,
    /// Elements keyed by their source key, in declaration order.
    pub elements: IndexMap<String, EnumElement>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal_name: None,
            docs: Docs::default(),
            elements: IndexMap::new(),
        }
    }

    pub fn with_internal_name(mut self, internal_name: impl Into<String>) -> Self {
        self.internal_name = Some(internal_name.into());
        self
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.docs = docs;
        self
    }

    /// Append an element under `key`.
    ///
    /// Re-inserting an existing key replaces the element in place and keeps
    /// its original position.
    pub fn element(mut self, key: impl Into<String>, element: EnumElement) -> Self {
        self.elements.insert(key.into(), element);
        self
    }
}

impl Documented for Enum {
    fn name(&self) -> &str {
        &self.name
    }

    fn internal_name(&self) -> Option<&str> {
        self.internal_name.as_deref()
    }

    fn docs(&self) -> &Docs {
        &self.docs
    }
}

/// A single member of an [`Enum`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumElement {
    /// Display name.
    pub name: String,
    /// Identifier used instead of the display name when set.
    pub internal_name: Option<String>,
    /// Integer literal as written in the source; `None` leaves numbering to the compiler.
    pub value: Option<String>,
    /// Documentation metadata.
    pub docs: Docs,
}

impl EnumElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal_name: None,
            value: None,
            docs: Docs::default(),
        }
    }

    pub fn with_internal_name(mut self, internal_name: impl Into<String>) -> Self {
        self.internal_name = Some(internal_name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.docs = docs;
        self
    }
}

impl Documented for EnumElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn internal_name(&self) -> Option<&str> {
        self.internal_name.as_deref()
    }

    fn docs(&self) -> &Docs {
        &self.docs
    }
}
