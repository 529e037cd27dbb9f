use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Banner placed at the top of every generated header.
pub const GENERATED_HEADER: &str = "// This file is generated by ifgen. Do not edit manually.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Write the file to disk, replacing any previous content.
    ///
    /// Returns the path that was written. Nothing is written when rendering fails.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        let content = self.render()?;
        write_file(&path, &content)?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Rules that determine how a file is rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRules {
    /// Banner written as the first line, if any
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Attach the banner that starts the file.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}
