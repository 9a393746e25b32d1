//! Rule-based noise filter

use std::fmt;

use serde::Serialize;
use tracing::trace;

use super::{CommitFilter, NoiseRules};
use crate::types::CommitRecord;

/// Why a commit was classified as noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseReason {
    /// Author looks like an automated tool
    BotAuthor,
    /// Merge commit
    MergeCommit,
    /// Message mentions build, tooling or infrastructure churn
    TechnicalKeyword,
    /// Message is too short to say anything
    TooShort,
    /// Message is a generic lockfile/config/gitignore update
    GenericFileUpdate,
}

impl fmt::Display for NoiseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BotAuthor => "bot author",
            Self::MergeCommit => "merge commit",
            Self::TechnicalKeyword => "technical keyword",
            Self::TooShort => "too short",
            Self::GenericFileUpdate => "generic file update",
        };
        f.write_str(name)
    }
}

/// Noise filter driven by [`NoiseRules`]
#[derive(Debug, Clone, Default)]
pub struct NoiseFilter {
    rules: NoiseRules,
}

impl NoiseFilter {
    /// Create a filter with the built-in rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with custom rules
    pub fn with_rules(rules: NoiseRules) -> Self {
        Self { rules }
    }

    /// Rules in use
    pub fn rules(&self) -> &NoiseRules {
        &self.rules
    }

    fn first_match(&self, commit: &CommitRecord) -> Option<NoiseReason> {
        let message = commit.message.to_lowercase();
        let author = commit.author.name.to_lowercase();

        if self.rules.bot_markers.iter().any(|m| author.contains(m.as_str())) {
            return Some(NoiseReason::BotAuthor);
        }

        if self
            .rules
            .merge_prefixes
            .iter()
            .any(|p| message.starts_with(p.as_str()))
        {
            return Some(NoiseReason::MergeCommit);
        }

        if self
            .rules
            .technical_keywords
            .iter()
            .any(|k| message.contains(k.as_str()))
        {
            return Some(NoiseReason::TechnicalKeyword);
        }

        let trimmed = message.trim();
        if trimmed.chars().count() < self.rules.min_length {
            return Some(NoiseReason::TooShort);
        }

        if self.rules.generic_patterns.iter().any(|p| p.is_match(trimmed)) {
            return Some(NoiseReason::GenericFileUpdate);
        }

        None
    }
}

impl CommitFilter for NoiseFilter {
    fn check(&self, commit: &CommitRecord) -> Option<NoiseReason> {
        let reason = self.first_match(commit);
        if let Some(reason) = reason {
            trace!(%reason, message = %commit.message, "commit is noise");
        }
        reason
    }
}
