//! C++ AST builders.

mod comment;
mod enums;

pub use comment::DocComment;
pub use enums::{EnumDecl, Enumerator};
