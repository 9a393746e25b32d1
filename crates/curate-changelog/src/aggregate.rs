//! Accumulation of categorized messages per version

use tracing::debug;

use crate::filter::NoiseReason;
use crate::types::{
    Category, CuratedChangelog, ProcessedVersion, RunSummary, VersionBlock, VersionSummary,
};

/// Why a commit did not make it into a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Rejected by the noise filter
    Noise(NoiseReason),
    /// Cleaned message was empty or too short
    TooShort,
    /// Rejected by the relevance gate
    Irrelevant,
}

/// Collects the outcome of every commit in one version block
#[derive(Debug)]
pub struct VersionAccumulator {
    version: ProcessedVersion,
    summary: VersionSummary,
    noise: usize,
    short: usize,
    irrelevant: usize,
}

impl VersionAccumulator {
    /// Start accumulating a version block
    pub fn new(block: &VersionBlock) -> Self {
        Self {
            version: ProcessedVersion::new(block.version.clone()),
            summary: VersionSummary {
                version: block.version.clone(),
                total: block.commits.len(),
                ..VersionSummary::default()
            },
            noise: 0,
            short: 0,
            irrelevant: 0,
        }
    }

    /// Record a kept commit
    pub fn keep(&mut self, category: Category, message: String) {
        self.summary.kept += 1;
        self.version.categories.insert(category, message);
    }

    /// Record a dropped commit
    pub fn drop_commit(&mut self, reason: DropReason) {
        self.summary.dropped += 1;
        match reason {
            DropReason::Noise(_) => self.noise += 1,
            DropReason::TooShort => self.short += 1,
            DropReason::Irrelevant => self.irrelevant += 1,
        }
    }

    /// Check if any message was kept
    pub fn is_empty(&self) -> bool {
        self.version.is_empty()
    }
}

/// Collects processed versions and run statistics
#[derive(Debug, Default)]
pub struct ChangelogAccumulator {
    versions: Vec<ProcessedVersion>,
    summary: RunSummary,
}

impl ChangelogAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished version; versions without content are counted but not kept
    pub fn push(&mut self, accumulated: VersionAccumulator) {
        let VersionAccumulator {
            version,
            mut summary,
            noise,
            short,
            irrelevant,
        } = accumulated;

        self.summary.input_versions += 1;
        self.summary.total_commits += summary.total;
        self.summary.dropped_noise += noise;
        self.summary.dropped_short += short;
        self.summary.dropped_irrelevant += irrelevant;

        summary.categories = version
            .categories
            .populated()
            .map(|category| (category, version.categories.count(category)))
            .collect();

        if version.is_empty() {
            debug!(version = %version.version, "no meaningful changes");
        } else {
            debug!(
                version = %version.version,
                items = version.categories.total(),
                dropped = summary.dropped,
                "version kept"
            );
            self.versions.push(version);
        }
        self.summary.versions.push(summary);
    }

    /// Finish the run. When no version has content a single empty
    /// placeholder version is returned so the document is never blank.
    pub fn finish(mut self) -> CuratedChangelog {
        if self.versions.is_empty() {
            debug!("no meaningful content found, creating placeholder");
            self.versions.push(ProcessedVersion::placeholder());
            self.summary.placeholder = true;
        }

        CuratedChangelog {
            versions: self.versions,
            summary: self.summary,
        }
    }
}
