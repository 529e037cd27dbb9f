use std::num::ParseIntError;

use thiserror::Error;

/// An element value that is not an integer literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed value '{value}' for enum element '{element}'")]
pub struct MalformedValue {
    /// Emitted identifier of the offending element.
    pub element: String,
    /// The value exactly as found in the model.
    pub value: String,
    #[source]
    pub source: ParseIntError,
}

/// Errors raised while rendering declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("malformed enum value '{value}' for element '{element}' of enum '{enum_name}'")]
    MalformedEnumValue {
        enum_name: String,
        element: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl RenderError {
    pub(crate) fn in_enum(enum_name: &str, err: MalformedValue) -> Self {
        Self::MalformedEnumValue {
            enum_name: enum_name.to_string(),
            element: err.element,
            value: err.value,
            source: err.source,
        }
    }

    /// Name of the enum whose rendering failed.
    pub fn enum_name(&self) -> &str {
        match self {
            Self::MalformedEnumValue { enum_name, .. } => enum_name,
        }
    }
}
