//! Commit message normalization
//!
//! Rewrites a raw commit message into a short, capitalized sentence fragment
//! without conventional-commit prefixes, issue references, file names, paths
//! or protocol jargon. Steps run in a fixed order and each works on the output
//! of the previous one.

mod steps;
pub mod tables;

pub use steps::{Rewrite, Step, StepKind};

use std::sync::LazyLock;

use tracing::trace;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::new);

/// Normalize a message with the default steps
pub fn normalize(message: &str) -> String {
    DEFAULT_NORMALIZER.normalize(message)
}

/// Ordered list of normalization steps
#[derive(Debug, Clone)]
pub struct Normalizer {
    steps: Vec<Step>,
}

impl Normalizer {
    /// Create a normalizer with the default steps
    pub fn new() -> Self {
        Self {
            steps: vec![
                Step::strip_merge_header(),
                Step::strip_commit_type(),
                Step::strip_issue_refs(),
                Step::headline(),
                Step::replace_jargon(),
                Step::strip_extensions(),
                Step::strip_paths(),
                Step::strip_acronyms(),
                Step::tidy(),
                Step::capitalize(),
            ],
        }
    }

    /// Create a normalizer from custom steps
    pub fn with_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Steps in application order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step over the message
    pub fn normalize(&self, message: &str) -> String {
        self.steps.iter().fold(message.to_string(), |text, step| {
            let next = step.apply(&text);
            if next != text {
                trace!(step = step.name, before = %text, after = %next, "normalized");
            }
            next
        })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
