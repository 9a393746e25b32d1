//! JSON changelog formatter

use chrono::{Local, NaiveDate};
use curate_core::config::DocumentConfig;
use curate_core::Result;
use serde::Serialize;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{CuratedChangelog, ProcessedVersion, RunSummary};

/// JSON changelog formatter, for feeding the curated log to other tools
pub struct JsonFormatter {
    /// Date recorded in the document
    pub generated_on: NaiveDate,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    title: &'a str,
    generated_on: NaiveDate,
    versions: &'a [ProcessedVersion],
    summary: &'a RunSummary,
}

impl JsonFormatter {
    /// Create a formatter stamped with today's date
    pub fn new() -> Self {
        Self {
            generated_on: Local::now().date_naive(),
        }
    }

    /// Set the recorded date
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for JsonFormatter {
    #[instrument(skip(self, changelog, config), fields(version_count = changelog.versions.len()))]
    fn format(&self, changelog: &CuratedChangelog, config: &DocumentConfig) -> Result<String> {
        let document = JsonDocument {
            title: &config.title,
            generated_on: self.generated_on,
            versions: &changelog.versions,
            summary: &changelog.summary,
        };

        let output = serde_json::to_string_pretty(&document)?;
        debug!(output_len = output.len(), "json changelog formatted");
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_format_json() {
        let mut version = ProcessedVersion::new("v1.0.0");
        version.categories.insert(Category::Feature, "Add quiz");
        version.categories.insert(Category::Feature, "Add notes");
        let changelog = CuratedChangelog {
            versions: vec![version],
            summary: RunSummary {
                total_commits: 3,
                ..RunSummary::default()
            },
        };

        let formatter =
            JsonFormatter::new().with_generated_on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        let output = formatter
            .format(&changelog, &DocumentConfig::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["generated_on"], "2026-10-19");
        assert_eq!(value["versions"][0]["version"], "v1.0.0");
        assert_eq!(
            value["versions"][0]["categories"]["feature"],
            serde_json::json!(["Add notes", "Add quiz"])
        );
        assert_eq!(value["summary"]["total_commits"], 3);
    }
}
