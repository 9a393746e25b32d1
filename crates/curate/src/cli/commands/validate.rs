//! Validate command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use curate_changelog::{load_versions, ChangelogGenerator};
use curate_core::config::validation::validate_config;
use curate_core::CurateError;

use crate::cli::{output, Cli, OutputFormat};

/// Run the pipeline and report what it would produce, writing nothing
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Version log to check (defaults to the configured input)
    pub input: Option<PathBuf>,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(strict = self.strict, "executing validate command");

        let (config, config_path) = cli.load_config()?;
        validate_config(&config)?;

        let input = self.input.clone().unwrap_or_else(|| config.input.clone());
        let versions = load_versions(&input)?;

        let generator = ChangelogGenerator::new(config);
        let curated = generator.curate(&versions);
        let summary = &curated.summary;

        let mut warnings: Vec<String> = Vec::new();
        if config_path.is_none() {
            warnings.push("No configuration file found, using defaults".to_string());
        }
        if versions.is_empty() {
            warnings.push(format!("{} contains no versions", input.display()));
        }
        if summary.placeholder {
            warnings.push("No user-facing changes survive curation".to_string());
        }
        let silent: Vec<&str> = summary
            .versions
            .iter()
            .filter(|v| v.kept == 0 && v.total > 0)
            .map(|v| v.version.as_str())
            .collect();
        if !silent.is_empty() {
            warnings.push(format!(
                "Omitted for having only noise: {}",
                silent.join(", ")
            ));
        }

        let passed = !(self.strict && !warnings.is_empty());

        match cli.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "valid": passed,
                    "input": input.display().to_string(),
                    "config_path": config_path.map(|p| p.display().to_string()),
                    "warnings": warnings,
                    "summary": summary,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", style("Validation Results").bold());
                    println!();

                    match &config_path {
                        Some(path) => println!("Config: {}", style(path.display()).cyan()),
                        None => println!("Config: {}", style("defaults").dim()),
                    }
                    println!("Input:  {}", style(input.display()).cyan());
                    println!();

                    for (key, value) in output::summary_lines(summary) {
                        println!("{}", output::key_value(&key, &value));
                    }
                    println!();

                    if !warnings.is_empty() {
                        println!("{}", style("Warnings:").yellow().bold());
                        for warning in &warnings {
                            println!("  {} {}", style("!").yellow(), warning);
                        }
                        println!();
                    }

                    if !passed {
                        println!(
                            "{} with {} warning(s) in strict mode",
                            style("✗ Validation failed").red().bold(),
                            warnings.len()
                        );
                    } else if warnings.is_empty() {
                        println!("{}", style("✓ All checks passed").green().bold());
                    } else {
                        println!(
                            "{} with {} warning(s)",
                            style("✓ Validation passed").green().bold(),
                            warnings.len()
                        );
                    }
                }
            }
        }

        if !passed {
            return Err(CurateError::Validation(format!(
                "{} warning(s) in strict mode",
                warnings.len()
            ))
            .into());
        }

        Ok(())
    }
}
