use std::{fmt, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Default filename used for diagnostics when parsing from a string.
pub const DEFAULT_FILENAME: &str = "interface.toml";

/// Root manifest for interface.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Interface metadata
    pub interface: InterfaceConfig,

    /// Enumerations in declaration order
    #[serde(default)]
    pub enums: IndexMap<String, EnumDef>,
}

/// The `[interface]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceConfig {
    /// Interface name; the header is written as `<name>.h`
    pub name: String,
    /// C++ namespace path, e.g. `A::B::C`
    #[serde(default)]
    pub namespace: Option<String>,
}

/// An `[enums.<key>]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDef {
    /// Display name (defaults to the table key)
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub internal_name: Option<String>,
    #[serde(default)]
    pub description: Option<Vec<String>>,
    #[serde(default)]
    pub design_description: Option<Vec<String>>,
    #[serde(default)]
    pub issues: Option<Vec<String>>,
    #[serde(default)]
    pub todos: Option<Vec<String>>,
    /// Elements in declaration order
    #[serde(default)]
    pub elements: IndexMap<String, ElementDef>,
}

/// An `[enums.<key>.elements.<key>]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDef {
    /// Display name (defaults to the table key)
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub internal_name: Option<String>,
    #[serde(default)]
    pub value: Option<Literal>,
    #[serde(default)]
    pub description: Option<Vec<String>>,
    #[serde(default)]
    pub design_description: Option<Vec<String>>,
    #[serde(default)]
    pub issues: Option<Vec<String>>,
    #[serde(default)]
    pub todos: Option<Vec<String>>,
}

/// An element value as written in the manifest.
///
/// Both `value = 10` and `value = "0x0A"` are accepted; the model only keeps
/// the textual form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Integer(i64),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse an interface manifest from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse an interface manifest from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        manifest.validate(&ctx)?;

        tracing::debug!(
            file = filename,
            interface = %manifest.interface.name,
            enums = manifest.enums.len(),
            "parsed interface manifest"
        );
        Ok(manifest)
    }

    /// Structural checks the deserializer cannot express.
    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.interface.name.trim().is_empty() {
            return Err(ctx.validation_error(
                "interface name must not be empty",
                ctx.find_key_span("interface", "name"),
            ));
        }
        Ok(())
    }
}
