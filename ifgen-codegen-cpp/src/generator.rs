use std::path::Path;

use eyre::Result;
use ifgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
use ifgen_core::GeneratedFile;
use ifgen_ir::Interface;

use crate::files::HeaderH;

/// C++ generator that emits one documented header per interface
pub struct Generator<'a> {
    interface: &'a Interface,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let header = HeaderH::new(self.interface);
        Ok(vec![PreviewFile {
            path: header.file_name(),
            content: header.render()?,
        }])
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        let header = HeaderH::new(self.interface);
        result.written.push(header.write(output_dir)?);

        tracing::info!(
            interface = %self.interface.name,
            enums = self.interface.enums.len(),
            written = result.written.len(),
            "generated C++ header"
        );
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(interface: &'a Interface) -> Self {
        Self { interface }
    }
}
