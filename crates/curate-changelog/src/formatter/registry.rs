//! Formatter registry

use std::path::Path;
use std::sync::Arc;

use super::ChangelogFormatter;
use super::{JsonFormatter, MarkdownFormatter};

/// Registry of available changelog formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn ChangelogFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![
                Arc::new(MarkdownFormatter::new()),
                Arc::new(JsonFormatter::new()),
            ],
        }
    }

    /// Get formatter by file extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn ChangelogFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.extension().eq_ignore_ascii_case(extension))
            .cloned()
    }

    /// Pick a formatter from an output path's extension, defaulting to
    /// Markdown
    pub fn for_path(&self, path: &Path) -> Option<Arc<dyn ChangelogFormatter>> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get(ext))
            .or_else(|| self.formatters.first().cloned())
    }

    /// Get all supported file extensions
    pub fn extensions(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.extension()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
