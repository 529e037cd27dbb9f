use std::path::{Path, PathBuf};

use eyre::Result;
use ifgen_codegen::CodeBuilder;
use ifgen_core::{FileRules, GeneratedFile, header_stem, include_guard, namespace_segments};
use ifgen_ir::Interface;

use super::GENERATED_HEADER;
use crate::render_enums;

/// The `<interface>.h` header holding every enum declaration.
pub struct HeaderH<'a> {
    interface: &'a Interface,
}

impl<'a> HeaderH<'a> {
    pub fn new(interface: &'a Interface) -> Self {
        Self { interface }
    }

    /// File name relative to the output directory, e.g. `Test.h`.
    pub fn file_name(&self) -> String {
        format!("{}.h", header_stem(&self.interface.name))
    }

    fn namespaces(&self) -> Vec<&str> {
        self.interface
            .namespace
            .as_deref()
            .map(namespace_segments)
            .unwrap_or_default()
    }
}

impl GeneratedFile for HeaderH<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::default().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> Result<String> {
        let enums = render_enums(self.interface.enums.values())?;
        let guard = include_guard(&self.file_name());
        let namespaces = self.namespaces();

        let mut builder = CodeBuilder::cpp();
        if let Some(header) = self.rules().header {
            builder.push_line(header).push_blank();
        }

        builder
            .push_line(&format!("#ifndef {guard}"))
            .push_line(&format!("#define {guard}"))
            .push_blank();

        if !namespaces.is_empty() {
            for namespace in &namespaces {
                builder.push_line(&format!("namespace {namespace} {{"));
            }
            builder.push_blank();
        }

        // Declarations are spliced byte-for-byte, never re-indented.
        if !enums.is_empty() {
            builder.push_raw(&enums).push_blank();
        }

        if !namespaces.is_empty() {
            for namespace in namespaces.iter().rev() {
                builder.push_line(&format!("}}  // namespace {namespace}"));
            }
            builder.push_blank();
        }

        builder.push_line(&format!("#endif  // {guard}"));
        Ok(builder.build())
    }
}
