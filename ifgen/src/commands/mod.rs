mod check;
mod generate;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ifgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ifgen")]
#[command(version)]
#[command(about = "Generate documented C++ enum headers from TOML interface manifests")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the C++ header from interface.toml
    Generate(GenerateCommand),

    /// Validate interface.toml without writing anything
    Check(CheckCommand),
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["ifgen", "generate"]).unwrap();

        assert_eq!(cli.verbose, 0);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.manifest, Path::new("interface.toml"));
        assert_eq!(cmd.output, Path::new("."));
        assert_eq!(cmd.namespace, None);
        assert!(!cmd.dry_run);
    }

    #[test]
    fn test_verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["ifgen", "check", "-vv", "--json"]).unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Check(ref cmd) if cmd.json));
    }

    #[test]
    fn test_generate_options() {
        let cli = Cli::try_parse_from([
            "ifgen",
            "generate",
            "-m",
            "api/Test.toml",
            "-o",
            "include",
            "--namespace",
            "A::B",
            "--dry-run",
        ])
        .unwrap();

        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.manifest, Path::new("api/Test.toml"));
        assert_eq!(cmd.output, Path::new("include"));
        assert_eq!(cmd.namespace.as_deref(), Some("A::B"));
        assert!(cmd.dry_run);
    }
}
