//! Changelog curation pipeline
//!
//! Every commit goes through the same stages: noise filter, normalizer,
//! relevance gate, categorizer. Survivors are accumulated per version and the
//! result is handed to a formatter.

use std::sync::Arc;

use curate_core::config::Config;
use curate_core::Result;
use tracing::{debug, info, instrument};

use crate::aggregate::{ChangelogAccumulator, DropReason, VersionAccumulator};
use crate::categorize::Categorizer;
use crate::filter::{CommitFilter, NoiseFilter, NoiseRules};
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::normalize::Normalizer;
use crate::relevance::RelevanceGate;
use crate::types::{Category, CommitRecord, CuratedChangelog, VersionBlock};

/// Changelog generator
pub struct ChangelogGenerator {
    filter: Box<dyn CommitFilter>,
    normalizer: Normalizer,
    gate: RelevanceGate,
    categorizer: Categorizer,
    formatter: Arc<dyn ChangelogFormatter>,
    config: Config,
}

impl ChangelogGenerator {
    /// Create a new generator with the default stages and markdown output
    pub fn new(config: Config) -> Self {
        Self {
            filter: Box::new(NoiseFilter::with_rules(NoiseRules::from_config(
                &config.filter,
            ))),
            normalizer: Normalizer::new(),
            gate: RelevanceGate::new(),
            categorizer: Categorizer::new(),
            formatter: Arc::new(MarkdownFormatter::new()),
            config,
        }
    }

    /// Use a custom commit filter
    pub fn with_filter<F: CommitFilter + 'static>(mut self, filter: F) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Use a custom normalizer
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Use a custom relevance gate
    pub fn with_gate(mut self, gate: RelevanceGate) -> Self {
        self.gate = gate;
        self
    }

    /// Use a custom categorizer
    pub fn with_categorizer(mut self, categorizer: Categorizer) -> Self {
        self.categorizer = categorizer;
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Use a formatter shared with a registry
    pub fn with_shared_formatter(mut self, formatter: Arc<dyn ChangelogFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one commit through the per-commit stages
    pub fn process_commit(
        &self,
        commit: &CommitRecord,
    ) -> std::result::Result<(Category, String), DropReason> {
        if let Some(reason) = self.filter.check(commit) {
            return Err(DropReason::Noise(reason));
        }

        let cleaned = self.normalizer.normalize(&commit.message);
        if cleaned.chars().count() < self.config.filter.min_cleaned_length.max(1) {
            debug!(message = %commit.message, cleaned = %cleaned, "message too short after cleaning");
            return Err(DropReason::TooShort);
        }

        if !self.gate.is_user_facing(&cleaned) {
            return Err(DropReason::Irrelevant);
        }

        let category = self.categorizer.categorize(commit);
        Ok((category, cleaned))
    }

    /// Curate one version block
    #[instrument(skip(self, block), fields(version = %block.version, commit_count = block.commits.len()))]
    pub fn curate_version(&self, block: &VersionBlock) -> VersionAccumulator {
        debug!("processing version");
        let mut accumulated = VersionAccumulator::new(block);

        for commit in &block.commits {
            match self.process_commit(commit) {
                Ok((category, message)) => accumulated.keep(category, message),
                Err(reason) => accumulated.drop_commit(reason),
            }
        }

        accumulated
    }

    /// Curate a whole version log
    #[instrument(skip(self, versions), fields(version_count = versions.len()))]
    pub fn curate(&self, versions: &[VersionBlock]) -> CuratedChangelog {
        info!(version_count = versions.len(), "curating changelog");
        let mut changelog = ChangelogAccumulator::new();

        for block in versions {
            changelog.push(self.curate_version(block));
        }

        let curated = changelog.finish();
        info!(
            total_commits = curated.summary.total_commits,
            dropped = curated.summary.dropped(),
            versions_kept = curated.versions.len(),
            placeholder = curated.summary.placeholder,
            "changelog curated"
        );
        curated
    }

    /// Format a curated changelog to a document
    pub fn format(&self, changelog: &CuratedChangelog) -> Result<String> {
        self.formatter.format(changelog, &self.config.document)
    }

    /// Curate and format in one step
    #[instrument(skip(self, versions), fields(version_count = versions.len()))]
    pub fn generate_formatted(&self, versions: &[VersionBlock]) -> Result<String> {
        let curated = self.curate(versions);
        let output = self.format(&curated)?;
        debug!(output_len = output.len(), "changelog formatted");
        Ok(output)
    }
}
