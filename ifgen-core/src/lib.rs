//! Core utilities and types for the ifgen interface generator.
//!
//! This crate provides the file-writing primitives and naming helpers
//! shared by the generator and the command-line front end.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GENERATED_HEADER, GeneratedFile};
// Naming helpers
pub use utils::{header_stem, include_guard, namespace_segments};
