//! Markdown changelog formatter

use std::fmt::Write;

use chrono::{Local, NaiveDate};
use curate_core::config::DocumentConfig;
use curate_core::{OutputError, Result};
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{Category, CuratedChangelog, ProcessedVersion};

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    /// Date shown in the footer
    pub generated_on: NaiveDate,
}

impl MarkdownFormatter {
    /// Create a formatter stamped with today's date
    pub fn new() -> Self {
        Self {
            generated_on: Local::now().date_naive(),
        }
    }

    /// Set the date shown in the footer
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    fn header(&self, lines: &mut Vec<String>, config: &DocumentConfig) {
        lines.push(format!("# {}", config.title));
        lines.push(String::new());
        if !config.tagline.is_empty() {
            lines.push(format!("*{}*", config.tagline));
            lines.push(String::new());
        }
        lines.push("---".to_string());
        lines.push(String::new());
    }

    fn version(&self, lines: &mut Vec<String>, version: &ProcessedVersion, config: &DocumentConfig) {
        lines.push(version_heading(version, config));
        lines.push(String::new());

        for category in Category::ALL {
            let mut items = version.categories.items(category).peekable();
            if items.peek().is_none() {
                continue;
            }

            lines.push(format!("### {}", category.heading()));
            lines.push(String::new());
            lines.extend(items.map(|item| format!("- {}", item)));
            lines.push(String::new());
        }

        if version.is_empty() {
            lines.push(format!("*{}*", config.empty_release_note));
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(String::new());
    }

    fn footer(&self, lines: &mut Vec<String>, config: &DocumentConfig) -> Result<()> {
        let mut date = String::new();
        write!(date, "{}", self.generated_on.format(&config.date_format)).map_err(|_| {
            OutputError::RenderFailed(format!("invalid date format '{}'", config.date_format))
        })?;

        lines.push("### 🔗 Quick Links".to_string());
        lines.push(format!(
            "- **📧 [Feedback](mailto:{})** - Tell us what you think",
            config.feedback_email
        ));
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
        lines.push(format!("*Updated automatically • Last refresh: {}*", date));
        Ok(())
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading line for a version: `## Release 1.2.0` or the unreleased heading
pub fn version_heading(version: &ProcessedVersion, config: &DocumentConfig) -> String {
    if version.is_unreleased() {
        return format!("## {}", config.unreleased_heading);
    }

    let trimmed = version.version.trim();
    let number = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);
    format!("## Release {}", number.trim())
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, changelog, config), fields(version_count = changelog.versions.len()))]
    fn format(&self, changelog: &CuratedChangelog, config: &DocumentConfig) -> Result<String> {
        let mut lines = Vec::new();

        self.header(&mut lines, config);
        for version in &changelog.versions {
            self.version(&mut lines, version, config);
        }
        self.footer(&mut lines, config)?;

        let output = lines.join("\n");
        debug!(lines = lines.len(), output_len = output.len(), "markdown changelog formatted");
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
