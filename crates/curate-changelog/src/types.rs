//! Changelog types

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Version label used for commits that are not part of a release yet
pub const UNRELEASED: &str = "unreleased";

fn unreleased() -> String {
    UNRELEASED.to_string()
}

// Log producers write `null` for fields they have no value for
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unreleased<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unreleased))
}

/// Author of a commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// A single commit from the version log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRecord {
    /// Full commit message (may span several lines)
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Commit author
    #[serde(deserialize_with = "null_as_default")]
    pub author: Author,
    /// Category hint from the tool that produced the log
    pub group: Option<String>,
}

impl CommitRecord {
    /// Create a new commit record
    pub fn new(message: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            author: Author {
                name: author.into(),
            },
            group: None,
        }
    }

    /// Set the category hint
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Category hint, or an empty string when absent
    pub fn group_hint(&self) -> &str {
        self.group.as_deref().unwrap_or_default()
    }
}

/// A release (or the unreleased tip) and its commits, as read from the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionBlock {
    /// Version identifier, e.g. `v1.4.0`, or `unreleased`
    #[serde(default = "unreleased", deserialize_with = "null_as_unreleased")]
    pub version: String,
    /// Commits in log order
    #[serde(default, deserialize_with = "null_as_default")]
    pub commits: Vec<CommitRecord>,
}

impl VersionBlock {
    /// Create a new version block
    pub fn new(version: impl Into<String>, commits: Vec<CommitRecord>) -> Self {
        Self {
            version: version.into(),
            commits,
        }
    }

    /// Create an unreleased block
    pub fn unreleased(commits: Vec<CommitRecord>) -> Self {
        Self::new(UNRELEASED, commits)
    }
}

/// Check whether a version label denotes unreleased work
pub fn is_unreleased(version: &str) -> bool {
    let version = version.trim();
    version.is_empty() || version.eq_ignore_ascii_case(UNRELEASED)
}

/// Output category, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// New user-visible capabilities
    Feature,
    /// Changes to existing behaviour
    Improvement,
    /// Bug fixes
    BugFix,
    /// Speed and efficiency work
    Performance,
}

impl Category {
    /// All categories in rendering order
    pub const ALL: [Category; 4] = [
        Category::Feature,
        Category::Improvement,
        Category::BugFix,
        Category::Performance,
    ];

    /// Plain section title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Feature => "New Features",
            Self::Improvement => "Improvements",
            Self::BugFix => "Bug Fixes",
            Self::Performance => "Performance",
        }
    }

    /// Emoji used in front of the section title
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Feature => "🚀",
            Self::Improvement => "✨",
            Self::BugFix => "🐛",
            Self::Performance => "⚡",
        }
    }

    /// Section heading as rendered in the document
    pub fn heading(&self) -> String {
        format!("{} {}", self.emoji(), self.title())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Cleaned messages per category.
///
/// Messages are kept as sets, so inserting the same text twice is a no-op and
/// iteration yields them in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryBucket {
    buckets: BTreeMap<Category, BTreeSet<String>>,
}

impl CategoryBucket {
    /// Create an empty bucket
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message; returns false if it was already present
    pub fn insert(&mut self, category: Category, message: impl Into<String>) -> bool {
        self.buckets
            .entry(category)
            .or_default()
            .insert(message.into())
    }

    /// Messages for one category in ascending order
    pub fn items(&self, category: Category) -> impl Iterator<Item = &str> {
        self.buckets
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Number of distinct messages in one category
    pub fn count(&self, category: Category) -> usize {
        self.buckets.get(&category).map_or(0, BTreeSet::len)
    }

    /// Number of distinct messages across all categories
    pub fn total(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    /// Check if no category holds a message
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-empty categories in rendering order
    pub fn populated(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|category| self.count(*category) > 0)
    }
}

/// A version that made it through the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedVersion {
    /// Version identifier as given in the log
    pub version: String,
    /// Categorized messages
    pub categories: CategoryBucket,
}

impl ProcessedVersion {
    /// Create a version with empty categories
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            categories: CategoryBucket::new(),
        }
    }

    /// Placeholder used when no version has any content
    pub fn placeholder() -> Self {
        Self::new(UNRELEASED)
    }

    /// Check if this is unreleased work
    pub fn is_unreleased(&self) -> bool {
        is_unreleased(&self.version)
    }

    /// Check if the version has any content
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Per-version statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSummary {
    /// Version identifier
    pub version: String,
    /// Commits in the input block
    pub total: usize,
    /// Commits that produced a categorized message
    pub kept: usize,
    /// Commits dropped for any reason
    pub dropped: usize,
    /// Distinct messages per category
    pub categories: BTreeMap<Category, usize>,
}

/// Statistics for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Version blocks in the input
    pub input_versions: usize,
    /// Commits across all versions
    pub total_commits: usize,
    /// Commits dropped by the noise filter
    pub dropped_noise: usize,
    /// Commits whose message was too short after cleaning
    pub dropped_short: usize,
    /// Commits rejected by the relevance gate
    pub dropped_irrelevant: usize,
    /// Whether a placeholder version was synthesized
    pub placeholder: bool,
    /// Per-version breakdown, in input order
    pub versions: Vec<VersionSummary>,
}

impl RunSummary {
    /// Commits dropped for any reason
    pub fn dropped(&self) -> usize {
        self.dropped_noise + self.dropped_short + self.dropped_irrelevant
    }

    /// Versions with at least one item
    pub fn versions_with_content(&self) -> usize {
        self.versions.iter().filter(|v| v.kept > 0).count()
    }
}

/// Result of curating a version log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedChangelog {
    /// Versions to render, in input order
    pub versions: Vec<ProcessedVersion>,
    /// Run statistics
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_record_defaults() {
        let commit: CommitRecord = serde_json::from_str(r#"{"message": "feat: add quiz"}"#).unwrap();
        assert_eq!(commit.message, "feat: add quiz");
        assert_eq!(commit.author.name, "");
        assert_eq!(commit.group_hint(), "");
    }

    #[test]
    fn test_version_block_defaults() {
        let block: VersionBlock = serde_json::from_str("{}").unwrap();
        assert_eq!(block.version, UNRELEASED);
        assert!(block.commits.is_empty());
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let block: VersionBlock = serde_json::from_str(
            r#"{
                "version": null,
                "commits": [
                    {"message": "feat: add quiz", "author": null, "group": null},
                    {"message": null, "author": {"name": null}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(block.version, UNRELEASED);
        assert_eq!(block.commits[0].author.name, "");
        assert_eq!(block.commits[0].group, None);
        assert_eq!(block.commits[1].message, "");

        let block: VersionBlock = serde_json::from_str(r#"{"version": "v1.0.0", "commits": null}"#).unwrap();
        assert_eq!(block.version, "v1.0.0");
        assert!(block.commits.is_empty());
    }

    #[test]
    fn test_is_unreleased() {
        assert!(is_unreleased("unreleased"));
        assert!(is_unreleased("Unreleased"));
        assert!(is_unreleased(""));
        assert!(!is_unreleased("v1.0.0"));
    }

    #[test]
    fn test_category_order_and_headings() {
        let mut sorted = vec![Category::Performance, Category::Feature, Category::BugFix];
        sorted.sort();
        assert_eq!(
            sorted,
            vec![Category::Feature, Category::BugFix, Category::Performance]
        );
        assert_eq!(Category::Feature.heading(), "🚀 New Features");
        assert_eq!(Category::Performance.heading(), "⚡ Performance");
    }

    #[test]
    fn test_bucket_deduplicates_and_sorts() {
        let mut bucket = CategoryBucket::new();
        assert!(bucket.insert(Category::BugFix, "Fix quiz timer"));
        assert!(bucket.insert(Category::BugFix, "Correct login error"));
        assert!(!bucket.insert(Category::BugFix, "Fix quiz timer"));

        let items: Vec<&str> = bucket.items(Category::BugFix).collect();
        assert_eq!(items, vec!["Correct login error", "Fix quiz timer"]);
        assert_eq!(bucket.total(), 2);
        assert_eq!(bucket.items(Category::Feature).count(), 0);
    }

    #[test]
    fn test_bucket_populated_order() {
        let mut bucket = CategoryBucket::new();
        bucket.insert(Category::Performance, "Faster loading");
        bucket.insert(Category::Feature, "Add notes");

        let populated: Vec<Category> = bucket.populated().collect();
        assert_eq!(populated, vec![Category::Feature, Category::Performance]);
    }

    #[test]
    fn test_bucket_serializes_with_category_keys() {
        let mut bucket = CategoryBucket::new();
        bucket.insert(Category::BugFix, "Fix crash");
        let json = serde_json::to_string(&bucket).unwrap();
        assert_eq!(json, r#"{"bug_fix":["Fix crash"]}"#);
    }
}
