//! Curate Changelog - user-facing changelogs from raw commit logs
//!
//! This crate filters noise out of a version/commit log, rewrites the
//! remaining commit messages into readable prose, sorts them into four fixed
//! categories and renders the result.

pub mod aggregate;
pub mod categorize;
pub mod filter;
pub mod formatter;
pub mod generator;
pub mod input;
pub mod normalize;
pub mod output;
pub mod relevance;
pub mod types;

pub use aggregate::DropReason;
pub use categorize::{CategoryRule, Categorizer};
pub use filter::{CommitFilter, NoiseFilter, NoiseReason, NoiseRules};
pub use formatter::{ChangelogFormatter, FormatterRegistry, JsonFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use input::{load_versions, parse_versions};
pub use normalize::{normalize, Normalizer};
pub use output::write_document;
pub use relevance::RelevanceGate;
pub use types::{
    Category, CategoryBucket, CommitRecord, CuratedChangelog, ProcessedVersion, RunSummary,
    VersionBlock,
};
