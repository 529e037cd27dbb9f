//! Language-specific abstractions.

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
