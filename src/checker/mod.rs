mod labels;
mod lockfile;
mod size;
mod suite;
mod topic;

pub use labels::LabelCheck;
pub use lockfile::LockfileCheck;
pub use missing_tests::{
    ClassViolation, DEFAULT_BYPASS_LABEL, DEFAULT_CLASS_EXCEPTIONS, DEFAULT_SUBCLASS_EXCEPTIONS,
    MissingTestsCheck,
};
pub use size::{BodyLengthCheck, DiffSizeCheck, FileSelector, SizeMetric};
pub use suite::CheckSuite;
pub use topic::{DEFAULT_NO_LABEL_INSTRUCTION, DEFAULT_NO_LABEL_MESSAGE, TopicChangeCheck};

use crate::diff::PullRequest;
use crate::report::Reporter;

pub trait Checker: std::fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Inspect the pull request and report findings.
    ///
    /// Runs are pure: the same pull request always yields the same outcomes,
    /// in the same order.
    fn check(&self, pr: &PullRequest, reporter: &mut dyn Reporter);
}

/// Render items as a comma separated list of backtick-quoted names.
fn backtick_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("`{}`", item.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
