//! Generate command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use curate_changelog::{load_versions, write_document, ChangelogGenerator, FormatterRegistry};

use crate::cli::{output, Cli, OutputFormat};

/// Curate the version log and write the changelog
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateCommand {
    /// Version log to read (defaults to the configured input)
    pub input: Option<PathBuf>,

    /// Changelog to write (defaults to the configured output)
    pub output: Option<PathBuf>,

    /// Print the document instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let (config, config_path) = cli.load_config()?;
        let input = self.input.clone().unwrap_or_else(|| config.input.clone());
        let output_path = self.output.clone().unwrap_or_else(|| config.output.clone());
        info!(
            input = %input.display(),
            output = %output_path.display(),
            stdout = self.stdout,
            "executing generate command"
        );

        let versions = load_versions(&input)?;

        let registry = FormatterRegistry::new();
        let formatter = registry
            .for_path(&output_path)
            .ok_or_else(|| anyhow::anyhow!("No changelog formatter available"))?;

        let generator = ChangelogGenerator::new(config).with_shared_formatter(formatter);
        let curated = generator.curate(&versions);
        let document = generator.format(&curated)?;

        if self.stdout {
            print!("{document}");
            if !document.ends_with('\n') {
                println!();
            }
            return Ok(());
        }

        write_document(&output_path, &document)?;

        match cli.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "input": input.display().to_string(),
                    "output": output_path.display().to_string(),
                    "config_path": config_path.map(|p| p.display().to_string()),
                    "summary": curated.summary,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!(
                        "Cleaned changelog written to {}",
                        output::path_style().apply_to(output_path.display())
                    ));
                    println!();
                    output::print_summary(&curated.summary);
                    if cli.verbose {
                        println!();
                        output::info(&format!("Read from {}", input.display()));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    const LOG: &str = r#"[
        {
            "version": "v1.2.0",
            "commits": [
                {"message": "feat: add voice chat session", "author": {"name": "alice"}},
                {"message": "chore: bump eslint to 9.0.0", "author": {"name": "ci-bot"}}
            ]
        }
    ]"#;

    fn run(args: &[&str]) -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(args).unwrap();
        match &cli.command {
            Some(crate::cli::Commands::Generate(cmd)) => cmd.execute(&cli),
            None => cli.generate.execute(&cli),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_generate_writes_markdown() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("CHANGELOG.json");
        let output = temp.path().join("docs").join("CHANGELOG_CLEAN.md");
        std::fs::write(&input, LOG).unwrap();
        let config = temp.path().join("curate.toml");
        std::fs::write(&config, "").unwrap();

        run(&[
            "curate",
            "-q",
            "-c",
            config.to_str().unwrap(),
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("## Release 1.2.0"));
        assert!(written.contains("- Add voice chat session"));
        assert!(!written.contains("eslint"));
    }

    #[test]
    fn test_generate_picks_json_by_extension() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("log.json");
        let output = temp.path().join("changelog.json");
        std::fs::write(&input, LOG).unwrap();
        let config = temp.path().join("curate.toml");
        std::fs::write(&config, "").unwrap();

        run(&[
            "curate",
            "generate",
            "-q",
            "-c",
            config.to_str().unwrap(),
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["versions"][0]["version"], "v1.2.0");
        assert_eq!(written["summary"]["dropped_noise"], 1);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("missing.json");
        let output = temp.path().join("CHANGELOG_CLEAN.md");
        let config = temp.path().join("curate.toml");
        std::fs::write(&config, "").unwrap();

        let err = run(&[
            "curate",
            "-q",
            "-c",
            config.to_str().unwrap(),
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .unwrap_err();

        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::INPUT_ERROR);
        assert!(err.to_string().contains("not found"));
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_input_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("CHANGELOG.json");
        let output = temp.path().join("CHANGELOG_CLEAN.md");
        std::fs::write(&input, "{ not json").unwrap();
        let config = temp.path().join("curate.toml");
        std::fs::write(&config, "").unwrap();

        let err = run(&[
            "curate",
            "-q",
            "-c",
            config.to_str().unwrap(),
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .unwrap_err();

        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::INPUT_ERROR);
        assert!(err.to_string().starts_with("Invalid JSON in"));
        assert!(!output.exists());
    }
}
