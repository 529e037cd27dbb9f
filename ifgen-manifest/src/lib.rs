//! TOML interface manifest parsing for the ifgen interface generator.
//!
//! An `interface.toml` describes the enumerations of one interface. Tables
//! keep their document order, which is the order declarations are rendered.
//!
//! ```toml
//! [interface]
//! name = "Test"
//! namespace = "XXX::YYY::ZZZ"
//!
//! [enums.Enum1]
//! todos = ["Do1", "Do2"]
//!
//! [enums.Enum1.elements.name1]
//! value = 1
//! design_description = ["Design Line1"]
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{DEFAULT_FILENAME, ElementDef, EnumDef, InterfaceConfig, Literal, Manifest};
