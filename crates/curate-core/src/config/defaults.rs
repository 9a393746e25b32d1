//! Default configuration values

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "curate.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "curate.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".curate.toml",
        ".curate.yaml",
    ]
}

/// Generate default configuration as TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# curate configuration
# Turns a JSON version/commit log into a user-facing changelog.

input: CHANGELOG.json
output: CHANGELOG_CLEAN.md

document:
  title: "📚 StudiBudi Product Updates"
  tagline: "Your AI-powered study companion keeps getting better! Here's what's new for students and educators."
  feedback_email: feedback@studibudi.com
  unreleased_heading: Recent Updates
  empty_release_note: No notable changes in this release.
  date_format: "%B %d, %Y"

filter:
  # Author substrings that mark automated commits ("bot" and
  # "gpt-engineer" are always included)
  extra_bot_markers: []
  # Message substrings that mark technical noise
  extra_noise_keywords: []
  min_message_length: 8
  min_cleaned_length: 5
"#;
