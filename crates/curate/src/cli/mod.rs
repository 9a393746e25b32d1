//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use curate_core::config::{load_config, load_config_or_default, Config};

use commands::{GenerateCommand, InitCommand, ValidateCommand};

/// curate - user-facing changelogs from raw commit logs
#[derive(Debug, Parser)]
#[command(name = "curate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (searched for when omitted)
    #[arg(short, long, global = true, env = "CURATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    // used when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateCommand,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Curate the version log and write the changelog (default)
    Generate(GenerateCommand),

    /// Run the pipeline and report what it would produce, writing nothing
    Validate(ValidateCommand),

    /// Write a default configuration file
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Some(Commands::Generate(ref cmd)) => cmd.execute(&self),
            Some(Commands::Validate(ref cmd)) => cmd.execute(&self),
            Some(Commands::Init(ref cmd)) => cmd.execute(&self),
            None => self.generate.execute(&self),
        }
    }

    /// Load the configuration named by `--config`, or search for one from the
    /// working directory and fall back to defaults
    pub fn load_config(&self) -> anyhow::Result<(Config, Option<PathBuf>)> {
        if let Some(path) = &self.config {
            debug!(path = %path.display(), "loading explicit config");
            return Ok((load_config(path)?, Some(path.clone())));
        }

        let cwd = std::env::current_dir()?;
        Ok(load_config_or_default(&cwd)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bare_invocation_generates() {
        let cli = Cli::try_parse_from(["curate"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.generate.input.is_none());
        assert!(!cli.generate.stdout);
    }

    #[test]
    fn test_positional_paths_without_subcommand() {
        let cli = Cli::try_parse_from(["curate", "log.json", "out/CHANGES.md", "--stdout"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.input, Some(PathBuf::from("log.json")));
        assert_eq!(cli.generate.output, Some(PathBuf::from("out/CHANGES.md")));
        assert!(cli.generate.stdout);
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["curate", "generate", "log.json"]).unwrap();
        match cli.command {
            Some(Commands::Generate(cmd)) => {
                assert_eq!(cmd.input, Some(PathBuf::from("log.json")));
                assert!(cmd.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["curate", "validate", "--strict"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Validate(ref v)) if v.strict));

        let cli = Cli::try_parse_from(["curate", "init", "--toml", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init(ref i)) if i.toml && i.force));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "curate", "validate", "-v", "--format", "json", "-c", "ci/curate.toml", "-C", "app",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("ci/curate.toml")));
        assert_eq!(cli.directory, Some(PathBuf::from("app")));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["curate", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let cli = Cli::try_parse_from(["curate", "-c", missing.to_str().unwrap()]).unwrap();

        let err = cli.load_config().unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_explicit_config_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("curate.toml");
        std::fs::write(&path, "output = \"NEWS.md\"\n").unwrap();
        let cli = Cli::try_parse_from(["curate", "-c", path.to_str().unwrap()]).unwrap();

        let (config, found) = cli.load_config().unwrap();
        assert_eq!(config.output, PathBuf::from("NEWS.md"));
        assert_eq!(found, Some(path));
    }
}
