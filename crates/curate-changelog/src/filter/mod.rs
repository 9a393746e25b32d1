//! Noise filtering
//!
//! Decides which commits carry nothing an end user would care about: bot
//! commits, merges, build and tooling churn, and trivially short messages.

mod noise;
mod rules;

pub use noise::{NoiseFilter, NoiseReason};
pub use rules::*;

use crate::types::CommitRecord;

/// Trait for commit filters
pub trait CommitFilter: Send + Sync {
    /// Return the reason a commit should be discarded, if any
    fn check(&self, commit: &CommitRecord) -> Option<NoiseReason>;

    /// Check if a commit should be discarded entirely
    fn is_noise(&self, commit: &CommitRecord) -> bool {
        self.check(commit).is_some()
    }
}
