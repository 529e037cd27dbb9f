//! Interface model for the ifgen interface generator.
//!
//! These types are the single source of truth handed from the manifest
//! parser to the code generators.
//!
//! # Architecture
//!
//! ```text
//! interface.toml → ifgen-manifest (parsing) → ifgen-ir (model) → codegen
//! ```
//!
//! The model is built once and never mutated afterwards. Every collection
//! that carries order (enums of an interface, elements of an enum) is an
//! [`IndexMap`](indexmap::IndexMap), so iteration order is insertion order.

mod docs;
mod enums;
mod interface;

pub use docs::{Docs, Documented};
pub use enums::{Enum, EnumElement};
pub use interface::Interface;
