use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use ifgen_codegen_cpp::render_enums;
use ifgen_ir::{Documented, Interface};
use ifgen_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the interface manifest (defaults to ./interface.toml)
    #[arg(short, long, default_value = "interface.toml")]
    pub manifest: PathBuf,

    /// Print the interface model as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        tracing::debug!(manifest = %self.manifest.display(), "loading manifest");
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();
        let interface = manifest.to_ir();

        // Rendering is the only place element values are parsed.
        render_enums(interface.enums.values()).wrap_err("Validation failed")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&interface)?);
            return Ok(());
        }

        println!("✓ {} is valid\n", self.manifest.display());
        print!("{}", summary(&interface));

        Ok(())
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

fn summary(interface: &Interface) -> String {
    let mut out = format!("  {}\n", interface.name);
    if let Some(namespace) = &interface.namespace {
        out.push_str(&format!("  namespace {namespace}\n"));
    }
    out.push('\n');

    let count = interface.enums.len();
    out.push_str(&format!(
        "  {} enum{}, {} element{}:\n",
        count,
        plural(count),
        interface.element_count(),
        plural(interface.element_count())
    ));
    for e in interface.enums.values() {
        let elements = e.elements.len();
        out.push_str(&format!(
            "    {} ({} element{})\n",
            e.brief_name(),
            elements,
            plural(elements)
        ));
    }
    out
}
