//! Changelog formatters

mod json;
mod markdown;
mod registry;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;

use curate_core::config::DocumentConfig;
use curate_core::Result;

use crate::types::CuratedChangelog;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render a curated changelog to a document
    fn format(&self, changelog: &CuratedChangelog, config: &DocumentConfig) -> Result<String>;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
