use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use ifgen_codegen_cpp::{Generator, LanguageCodegen};
use ifgen_ir::{Documented, Interface};
use ifgen_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the interface manifest (defaults to ./interface.toml)
    #[arg(short, long, default_value = "interface.toml")]
    pub manifest: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Wrap declarations in this namespace instead of the manifest's, e.g. `A::B`
    #[arg(long)]
    pub namespace: Option<String>,

    /// Preview the generated header without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        tracing::debug!(manifest = %self.manifest.display(), "loading manifest");
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();
        let interface = self.interface(&manifest);
        let generator = Generator::new(&interface);

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator, &interface)
        }
    }

    /// Lower the manifest, applying the `--namespace` override.
    fn interface(&self, manifest: &Manifest) -> Interface {
        let mut interface = manifest.to_ir();
        if let Some(namespace) = &self.namespace {
            interface.namespace = Some(namespace.clone());
        }
        interface
    }

    fn run_generation(&self, generator: &Generator, interface: &Interface) -> Result<()> {
        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate header")?;

        println!("{}", interface.name);
        if let Some(namespace) = &interface.namespace {
            println!("namespace {namespace}");
        }
        println!();

        println!("Enums ({}):", interface.enums.len());
        for e in interface.enums.values() {
            println!("  {} ({})", e.brief_name(), e.elements.len());
        }
        println!();

        for path in &result.written {
            println!("Generated: {}", path.display());
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator
            .preview()
            .wrap_err("Failed to render header")?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!(
            "{} {} file(s) would be generated",
            files.len(),
            generator.language()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
[interface]
name = "Test.xml"
namespace = "XXX::YYY"

[enums.Color.elements.red]
[enums.Color.elements.green]
value = 5
"#;

    fn command(temp: &TempDir, namespace: Option<&str>, dry_run: bool) -> GenerateCommand {
        let manifest = temp.path().join("interface.toml");
        fs::write(&manifest, MANIFEST).unwrap();

        GenerateCommand {
            manifest,
            output: temp.path().join("out"),
            namespace: namespace.map(str::to_string),
            dry_run,
        }
    }

    #[test]
    fn test_generate_writes_header() {
        let temp = TempDir::new().unwrap();
        command(&temp, None, false).run().unwrap();

        let header = fs::read_to_string(temp.path().join("out/Test.h")).unwrap();
        assert!(header.contains("#ifndef TEST_H_\n"));
        assert!(header.contains("namespace XXX {\nnamespace YYY {\n"));
        assert!(header.contains("    red,\n\n"));
        assert!(header.contains("    green = 5\n};\n"));
    }

    #[test]
    fn test_namespace_override() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, Some("app::v1"), false);
        let manifest = Manifest::from_file(&cmd.manifest).unwrap();

        let interface = cmd.interface(&manifest);
        assert_eq!(interface.namespace.as_deref(), Some("app::v1"));

        cmd.run().unwrap();
        let header = fs::read_to_string(temp.path().join("out/Test.h")).unwrap();
        assert!(header.contains("}  // namespace v1\n}  // namespace app\n"));
        assert!(!header.contains("XXX"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        command(&temp, None, true).run().unwrap();

        assert!(!temp.path().join("out").exists());
    }
}
