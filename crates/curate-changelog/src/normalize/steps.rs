//! Normalization steps

use regex::{NoExpand, Regex};

use super::tables::{ACRONYMS, COMMIT_TYPES, PATH_ROOTS, SOURCE_EXTENSIONS, SYNONYMS};

/// An ordered list of pattern replacements
#[derive(Debug, Clone)]
pub struct Rewrite {
    rules: Vec<(Regex, String)>,
}

impl Rewrite {
    /// Create an empty rewrite
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; every match of `pattern` is replaced literally
    pub fn rule(mut self, pattern: &str, replacement: impl Into<String>) -> Self {
        let regex = Regex::new(pattern).expect("Invalid regex");
        self.rules.push((regex, replacement.into()));
        self
    }

    /// Append a rule that deletes every match of `pattern`
    pub fn remove(self, pattern: &str) -> Self {
        self.rule(pattern, "")
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn apply(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |text, (regex, replacement)| {
                regex
                    .replace_all(&text, NoExpand(replacement.as_str()))
                    .into_owned()
            })
    }
}

impl Default for Rewrite {
    fn default() -> Self {
        Self::new()
    }
}

/// What a step does to the message
#[derive(Debug, Clone)]
pub enum StepKind {
    /// Regex replacements
    Rewrite(Rewrite),
    /// Keep the first line up to the first semicolon, trimmed
    Headline,
    /// Trim and upper-case the first character
    Capitalize,
}

/// A named normalization step
#[derive(Debug, Clone)]
pub struct Step {
    /// Step name, used in logs and tests
    pub name: &'static str,
    /// Transformation
    pub kind: StepKind,
}

impl Step {
    fn rewrite(name: &'static str, rewrite: Rewrite) -> Self {
        Self {
            name,
            kind: StepKind::Rewrite(rewrite),
        }
    }

    /// Apply the step
    pub fn apply(&self, input: &str) -> String {
        match &self.kind {
            StepKind::Rewrite(rewrite) => rewrite.apply(input),
            StepKind::Headline => headline(input),
            StepKind::Capitalize => capitalize(input),
        }
    }

    /// Leading "Merge pull request #N from ..." line
    pub fn strip_merge_header() -> Self {
        Self::rewrite(
            "strip_merge_header",
            Rewrite::new().remove(r"^Merge pull request #\d+ from [^\n]+\n+"),
        )
    }

    /// Leading `type(scope):` prefix
    pub fn strip_commit_type() -> Self {
        let pattern = format!(r"^({})(\([^)]*\))?\s*:\s*", COMMIT_TYPES.join("|"));
        Self::rewrite("strip_commit_type", Rewrite::new().remove(&pattern))
    }

    /// `(#N)`, `closes #N` and `fixes #N` references
    pub fn strip_issue_refs() -> Self {
        Self::rewrite(
            "strip_issue_refs",
            Rewrite::new()
                .remove(r"\s*\(#\d+\)")
                .remove(r"(?i)\s*closes?\s+#\d+")
                .remove(r"(?i)\s*fix(?:es)?\s+#\d+"),
        )
    }

    /// First line, first clause
    pub fn headline() -> Self {
        Self {
            name: "headline",
            kind: StepKind::Headline,
        }
    }

    /// Technical terms to user-facing words
    pub fn replace_jargon() -> Self {
        let rewrite = SYNONYMS
            .iter()
            .fold(Rewrite::new(), |rewrite, (term, replacement)| {
                rewrite.rule(&format!(r"(?i)\b{}\b", regex::escape(term)), *replacement)
            });
        Self::rewrite("replace_jargon", rewrite)
    }

    /// Dotted source file extensions
    pub fn strip_extensions() -> Self {
        Self::rewrite(
            "strip_extensions",
            Rewrite::new().remove(&format!(r"\.({})", SOURCE_EXTENSIONS)),
        )
    }

    /// `src/...`-style path fragments
    pub fn strip_paths() -> Self {
        Self::rewrite(
            "strip_paths",
            Rewrite::new().remove(&format!(r"\b({})/[^\s]*", PATH_ROOTS.join("|"))),
        )
    }

    /// Protocol and format acronyms
    pub fn strip_acronyms() -> Self {
        Self::rewrite(
            "strip_acronyms",
            Rewrite::new().remove(&format!(r"\b({})\b", ACRONYMS.join("|"))),
        )
    }

    /// Whitespace runs, trailing separators and leading dashes
    pub fn tidy() -> Self {
        Self::rewrite(
            "tidy",
            Rewrite::new()
                .rule(r"\s+", " ")
                .remove(r"[;,]\s*$")
                .remove(r"^\s*[-\s]+"),
        )
    }

    /// Trim and capitalize
    pub fn capitalize() -> Self {
        Self {
            name: "capitalize",
            kind: StepKind::Capitalize,
        }
    }
}

fn headline(input: &str) -> String {
    input
        .split('\n')
        .next()
        .and_then(|line| line.split(';').next())
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn capitalize(input: &str) -> String {
    let mut chars = input.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
