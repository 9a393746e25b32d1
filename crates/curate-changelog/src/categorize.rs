//! Commit categorization
//!
//! Rules are evaluated in order and the first match wins. Keyword lists
//! overlap ("optimize" is both an improvement and a performance term), so the
//! order decides the outcome.

use tracing::trace;

use crate::types::{Category, CommitRecord};

/// Keywords that put a commit into one category
#[derive(Debug, Clone)]
pub struct CategoryRule {
    /// Category assigned on match
    pub category: Category,
    /// Lower-case substrings to look for
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Create a rule
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Check if the lower-cased text contains one of the keywords
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Message keyword rules, in priority order
pub fn default_message_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            Category::Feature,
            &[
                "voice", "audio", "chat", "tutor", "ai", "learning", "study", "quiz", "session",
                "dashboard", "profile", "add", "create", "new", "implement", "introduce",
            ],
        ),
        CategoryRule::new(
            Category::Improvement,
            &[
                "improve", "enhance", "better", "update", "redesign", "mobile", "responsive",
                "optimize", "change", "modify", "adjust",
            ],
        ),
        CategoryRule::new(
            Category::BugFix,
            &[
                "fix", "resolve", "correct", "bug", "issue", "problem", "error", "solve",
            ],
        ),
        CategoryRule::new(
            Category::Performance,
            &[
                "faster", "speed", "performance", "quick", "loading", "optimize", "efficient",
            ],
        ),
    ]
}

/// Group hint rules, consulted when no message rule matched
pub fn default_group_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(Category::Feature, &["feature"]),
        CategoryRule::new(Category::Improvement, &["improvement"]),
        CategoryRule::new(Category::BugFix, &["bug", "fix"]),
        CategoryRule::new(Category::Performance, &["performance"]),
    ]
}

/// Assigns every commit to exactly one category
#[derive(Debug, Clone)]
pub struct Categorizer {
    message_rules: Vec<CategoryRule>,
    group_rules: Vec<CategoryRule>,
    fallback: Category,
}

impl Categorizer {
    /// Create a categorizer with the default rules
    pub fn new() -> Self {
        Self {
            message_rules: default_message_rules(),
            group_rules: default_group_rules(),
            fallback: Category::Improvement,
        }
    }

    /// Replace the message rules
    pub fn with_message_rules(mut self, rules: Vec<CategoryRule>) -> Self {
        self.message_rules = rules;
        self
    }

    /// Set the category used when nothing matches
    pub fn with_fallback(mut self, category: Category) -> Self {
        self.fallback = category;
        self
    }

    /// Categorize a commit by its raw message, then its group hint
    pub fn categorize(&self, commit: &CommitRecord) -> Category {
        let message = commit.message.to_lowercase();
        if let Some(rule) = self.message_rules.iter().find(|r| r.matches(&message)) {
            trace!(category = %rule.category, "matched message keyword");
            return rule.category;
        }

        let group = commit.group_hint().to_lowercase();
        if let Some(rule) = self.group_rules.iter().find(|r| r.matches(&group)) {
            trace!(category = %rule.category, group = %group, "matched group hint");
            return rule.category;
        }

        self.fallback
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorize(message: &str) -> Category {
        Categorizer::new().categorize(&CommitRecord::new(message, "alice"))
    }

    fn categorize_with_group(message: &str, group: &str) -> Category {
        Categorizer::new().categorize(&CommitRecord::new(message, "alice").with_group(group))
    }

    #[test]
    fn test_feature_keywords() {
        assert_eq!(categorize("feat: add voice chat session"), Category::Feature);
        assert_eq!(categorize("Introduce flashcards"), Category::Feature);
    }

    #[test]
    fn test_improvement_keywords() {
        assert_eq!(categorize("Redesign the settings screen"), Category::Improvement);
        assert_eq!(categorize("Better contrast on buttons"), Category::Improvement);
    }

    #[test]
    fn test_bug_fix_keywords() {
        assert_eq!(categorize("Fix crash on logout"), Category::BugFix);
        assert_eq!(categorize("Resolve broken links"), Category::BugFix);
    }

    #[test]
    fn test_performance_keywords() {
        assert_eq!(categorize("Faster startup"), Category::Performance);
        assert_eq!(categorize("Lazy loading for images"), Category::Performance);
    }

    #[test]
    fn test_first_match_wins() {
        // "optimize" is an improvement before it is a performance term
        assert_eq!(categorize("Optimize image loading"), Category::Improvement);
        // features outrank fixes: "fix" and "quiz" both match
        assert_eq!(categorize("fix quiz scoring"), Category::Feature);
        // "ai" matches inside other words
        assert_eq!(categorize("fix sign-in failure"), Category::Feature);
    }

    #[test]
    fn test_uses_raw_message() {
        // conventional prefix is still visible to the rules
        assert_eq!(categorize("perf: faster startup"), Category::Performance);
        assert_eq!(categorize("docs: correct typo"), Category::BugFix);
    }

    #[test]
    fn test_group_hint_fallback() {
        assert_eq!(categorize_with_group("Polish the footer", "Features"), Category::Feature);
        assert_eq!(categorize_with_group("Polish the footer", "Bug Fixes"), Category::BugFix);
        assert_eq!(categorize_with_group("Polish the footer", "hotfix"), Category::BugFix);
        assert_eq!(
            categorize_with_group("Polish the footer", "Performance"),
            Category::Performance
        );
        assert_eq!(
            categorize_with_group("Polish the footer", "Improvements"),
            Category::Improvement
        );
    }

    #[test]
    fn test_message_beats_group_hint() {
        assert_eq!(categorize_with_group("Fix crash on logout", "Features"), Category::BugFix);
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(categorize("Polish the footer"), Category::Improvement);
        assert_eq!(categorize_with_group("Polish the footer", "misc"), Category::Improvement);
    }

    #[test]
    fn test_custom_fallback() {
        let categorizer = Categorizer::new().with_fallback(Category::Performance);
        assert_eq!(
            categorizer.categorize(&CommitRecord::new("Polish the footer", "alice")),
            Category::Performance
        );
    }
}
