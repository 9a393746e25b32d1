//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version/commit log to read
    pub input: PathBuf,

    /// Rendered changelog to write
    pub output: PathBuf,

    /// Document text and layout
    pub document: DocumentConfig,

    /// Noise filter tuning
    pub filter: FilterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("CHANGELOG.json"),
            output: PathBuf::from("CHANGELOG_CLEAN.md"),
            document: DocumentConfig::default(),
            filter: FilterConfig::default(),
        }
    }
}

/// Rendered document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Document title (rendered as the top-level heading)
    pub title: String,

    /// Tagline rendered in italics under the title
    pub tagline: String,

    /// Address for the feedback link in the footer
    pub feedback_email: String,

    /// Heading used for unreleased versions
    pub unreleased_heading: String,

    /// Line emitted for a version without any items
    pub empty_release_note: String,

    /// chrono format string for the refresh date in the footer
    pub date_format: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "📚 StudiBudi Product Updates".to_string(),
            tagline: "Your AI-powered study companion keeps getting better! \
                      Here's what's new for students and educators."
                .to_string(),
            feedback_email: "feedback@studibudi.com".to_string(),
            unreleased_heading: "Recent Updates".to_string(),
            empty_release_note: "No notable changes in this release.".to_string(),
            date_format: "%B %d, %Y".to_string(),
        }
    }
}

/// Noise filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Author substrings marking automated commits, on top of the built-in set
    pub extra_bot_markers: Vec<String>,

    /// Message substrings marking technical noise, on top of the built-in set
    pub extra_noise_keywords: Vec<String>,

    /// Raw messages shorter than this (after trimming) are noise
    pub min_message_length: usize,

    /// Cleaned messages shorter than this are dropped
    pub min_cleaned_length: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extra_bot_markers: Vec::new(),
            extra_noise_keywords: Vec::new(),
            min_message_length: 8,
            min_cleaned_length: 5,
        }
    }
}
