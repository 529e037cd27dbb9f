//! Shared code generation utilities for the ifgen interface generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `ifgen-codegen-cpp`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile, etc.)

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, INDENT, Renderable};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
