//! Lowering from the manifest into the interface model.

use ifgen_ir::{Docs, Enum, EnumElement, Interface};

use crate::{ElementDef, EnumDef, Manifest};

impl Manifest {
    /// Build the interface model, filling display names from table keys.
    pub fn to_ir(&self) -> Interface {
        Interface {
            name: self.interface.name.clone(),
            namespace: self.interface.namespace.clone(),
            enums: self
                .enums
                .iter()
                .map(|(key, def)| (key.clone(), lower_enum(key, def)))
                .collect(),
        }
    }
}

fn lower_enum(key: &str, def: &EnumDef) -> Enum {
    Enum {
        name: def.name.clone().unwrap_or_else(|| key.to_string()),
        internal_name: def.internal_name.clone(),
        docs: Docs {
            description: def.description.clone(),
            design_description: def.design_description.clone(),
            issues: def.issues.clone(),
            todos: def.todos.clone(),
        },
        elements: def
            .elements
            .iter()
            .map(|(key, def)| (key.clone(), lower_element(key, def)))
            .collect(),
    }
}

fn lower_element(key: &str, def: &ElementDef) -> EnumElement {
    EnumElement {
        name: def.name.clone().unwrap_or_else(|| key.to_string()),
        internal_name: def.internal_name.clone(),
        value: def.value.as_ref().map(ToString::to_string),
        docs: Docs {
            description: def.description.clone(),
            design_description: def.design_description.clone(),
            issues: def.issues.clone(),
            todos: def.todos.clone(),
        },
    }
}
