//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::info;

use curate_core::config::defaults::{
    default_config_toml, DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML,
};

use crate::cli::Cli;

/// Write a default configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,

    /// Never prompt; fail if the file already exists
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;
        let (config_path, content) = self.render(cwd);

        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        std::fs::write(&config_path, &content)?;

        if !cli.quiet {
            println!(
                "{} Created configuration at {}",
                style("✓").green().bold(),
                style(config_path.display()).cyan()
            );
            println!();
            println!("Next steps:");
            println!("  1. Edit {} to set your title and inputs", config_path.display());
            println!("  2. Run {} to preview the result", style("curate validate").cyan());
            println!("  3. Run {} to write the changelog", style("curate").cyan());
        }

        Ok(())
    }

    fn render(&self, dir: PathBuf) -> (PathBuf, String) {
        if self.toml {
            (dir.join(DEFAULT_CONFIG_TOML), default_config_toml())
        } else {
            (dir.join(DEFAULT_CONFIG_YAML), DEFAULT_CONFIG_TEMPLATE.to_string())
        }
    }
}
