//! Noise rule tables

use std::sync::LazyLock;

use curate_core::config::FilterConfig;
use regex::Regex;

/// Author substrings marking automated commits
pub const BOT_MARKERS: &[&str] = &["bot", "gpt-engineer"];

/// Message prefixes of merge commits
pub const MERGE_PREFIXES: &[&str] = &["merge pull request", "merge branch"];

/// Message substrings marking build, tooling and infrastructure churn
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "lovable",
    "code editor",
    "edited ui in lovable",
    "code edited in lovable",
    "lovable code editor",
    "vite.config",
    "package.json",
    "package-lock",
    "yarn.lock",
    "bun.lockb",
    "eslint",
    "prettier",
    "github workflow",
    "release drafter",
    "ci/cd",
    "grant contents:write",
    "disable pr trigger",
    "auto-generated",
    "version bump",
    "release notes",
    "pr title guide",
    "setup documentation",
    "__pycache__",
    "ignore list",
    "binary file",
    "logging configuration",
    "logging calls",
    "rls policies",
    "database schema",
    "instruction_cache",
    "build script",
    "deployment",
    "docker",
    "kubernetes",
    "environment variable",
    "env var",
    "config var",
    "devlogger",
    "console.log",
    "debug log",
];

/// Whole-message patterns for lockfile, config and gitignore updates
pub const GENERIC_UPDATE_PATTERNS: &[&str] = &[
    r"^update.*\.lock$",
    r"^update.*\.json$",
    r"^update.*\.ya?ml$",
    r"^add.*\.gitignore$",
    r"^remove.*\.gitignore$",
];

static GENERIC_UPDATE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    GENERIC_UPDATE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid regex"))
        .collect()
});

/// Rule tables used by the noise filter.
///
/// Markers and keywords are stored lower-cased; matching is done against the
/// lower-cased author name and message.
#[derive(Debug, Clone)]
pub struct NoiseRules {
    /// Author substrings marking automated commits
    pub bot_markers: Vec<String>,
    /// Message prefixes of merge commits
    pub merge_prefixes: Vec<String>,
    /// Message substrings marking technical noise
    pub technical_keywords: Vec<String>,
    /// Minimum trimmed message length in characters
    pub min_length: usize,
    /// Generic file update patterns, matched against the trimmed message
    pub generic_patterns: Vec<Regex>,
}

fn lowered(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

impl Default for NoiseRules {
    fn default() -> Self {
        Self {
            bot_markers: lowered(BOT_MARKERS),
            merge_prefixes: lowered(MERGE_PREFIXES),
            technical_keywords: lowered(TECHNICAL_KEYWORDS),
            min_length: 8,
            generic_patterns: GENERIC_UPDATE_REGEXES.clone(),
        }
    }
}

impl NoiseRules {
    /// Built-in rules extended with configured markers and keywords
    pub fn from_config(config: &FilterConfig) -> Self {
        let mut rules = Self::default();
        rules.min_length = config.min_message_length;
        for marker in &config.extra_bot_markers {
            rules = rules.with_bot_marker(marker);
        }
        for keyword in &config.extra_noise_keywords {
            rules = rules.with_keyword(keyword);
        }
        rules
    }

    /// Add an author marker
    pub fn with_bot_marker(mut self, marker: impl AsRef<str>) -> Self {
        let marker = marker.as_ref().trim().to_lowercase();
        if !marker.is_empty() && !self.bot_markers.contains(&marker) {
            self.bot_markers.push(marker);
        }
        self
    }

    /// Add a technical-noise keyword
    pub fn with_keyword(mut self, keyword: impl AsRef<str>) -> Self {
        let keyword = keyword.as_ref().trim().to_lowercase();
        if !keyword.is_empty() && !self.technical_keywords.contains(&keyword) {
            self.technical_keywords.push(keyword);
        }
        self
    }

    /// Set the minimum trimmed message length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}
