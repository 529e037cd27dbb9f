//! C++ header generation for the ifgen interface generator.
//!
//! The heart of this crate is the rendering engine in [`render`]: pure
//! functions turning documented enums into Doxygen-commented C++
//! declarations. [`Generator`] wraps the engine output into a header with an
//! include guard and namespace blocks.
//!
//! ```
//! use ifgen_codegen_cpp::render_enum;
//! use ifgen_ir::{Enum, EnumElement};
//!
//! let e = Enum::new("E2")
//!     .element("a", EnumElement::new("val_1"))
//!     .element("b", EnumElement::new("val_2").with_value("100"));
//!
//! let text = render_enum(&e).unwrap();
//! assert!(text.starts_with("/**\n * @brief Enumeration E2.\n */\nenum E2\n{\n"));
//! assert!(text.ends_with("    val_2 = 100\n};\n"));
//! ```

mod error;
mod generator;
mod literal;

pub mod ast;
pub mod files;
pub mod render;

pub use ast::{DocComment, EnumDecl, Enumerator};
pub use error::{MalformedValue, RenderError};
pub use generator::Generator;
pub use ifgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use literal::parse_literal;
pub use render::{
    ENUM_LABEL, Numbered, number_elements, render_comment, render_element, render_elements,
    render_enum, render_enums,
};
