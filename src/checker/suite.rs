use crate::diff::PullRequest;
use crate::report::Report;

use super::Checker;

/// An ordered list of checks run against one pull request.
///
/// Checks share nothing but the report they append to, so outcome order is
/// the registration order of the checks.
#[derive(Debug, Default)]
pub struct CheckSuite {
    checks: Vec<Box<dyn Checker>>,
}

impl CheckSuite {
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn push(&mut self, check: impl Checker + 'static) {
        self.checks.push(Box::new(check));
    }

    #[must_use]
    pub fn with(mut self, check: impl Checker + 'static) -> Self {
        self.push(check);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Names of the registered checks, in run order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|check| check.name())
    }

    #[must_use]
    pub fn run(&self, pr: &PullRequest) -> Report {
        let mut report = Report::new();
        for check in &self.checks {
            let before = report.outcomes().len();
            check.check(pr, &mut report);
            tracing::info!(
                check = check.name(),
                outcomes = report.outcomes().len() - before,
                "check finished"
            );
        }
        report
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
