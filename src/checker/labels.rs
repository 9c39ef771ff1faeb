use crate::diff::PullRequest;
use crate::matcher::PatternSet;
use crate::report::Reporter;

use super::{Checker, backtick_list};

/// Validates the pull request labels.
///
/// - any label equal (ignoring case) to a do-not-merge label is an error;
/// - every required pattern must be matched by at least one label (error);
/// - every recommended pattern should be matched by at least one label (warning).
///
/// Patterns are searched, not anchored. A single `""` pattern is the idiom for
/// "at least one label of any kind".
#[derive(Debug, Clone, Default)]
pub struct LabelCheck {
    do_not_merge: Vec<String>,
    required: PatternSet,
    required_message: Option<String>,
    recommended: PatternSet,
    recommended_message: Option<String>,
}

impl LabelCheck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_do_not_merge<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.do_not_merge = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_required(mut self, patterns: PatternSet, message: Option<String>) -> Self {
        self.required = patterns;
        self.required_message = message;
        self
    }

    #[must_use]
    pub fn with_recommended(mut self, patterns: PatternSet, message: Option<String>) -> Self {
        self.recommended = patterns;
        self.recommended_message = message;
        self
    }

    fn blocking_labels<'a>(&self, pr: &'a PullRequest) -> Vec<&'a str> {
        let blocked: Vec<String> = self.do_not_merge.iter().map(|l| l.to_lowercase()).collect();
        pr.labels()
            .iter()
            .filter(|label| blocked.contains(&label.to_lowercase()))
            .map(String::as_str)
            .collect()
    }

    /// Sources of the patterns in `patterns` that no label matches.
    fn missing(patterns: &PatternSet, pr: &PullRequest) -> Vec<String> {
        patterns
            .unmatched(pr.labels().iter().map(String::as_str))
            .into_iter()
            .map(|regex| regex.as_str().to_string())
            .collect()
    }

    fn missing_message(custom: Option<&String>, missing: &[String]) -> String {
        custom.cloned().unwrap_or_else(|| {
            format!(
                "PR is missing at least one label matching: {}.",
                backtick_list(missing)
            )
        })
    }
}

impl Checker for LabelCheck {
    fn name(&self) -> &'static str {
        "labels"
    }

    fn check(&self, pr: &PullRequest, reporter: &mut dyn Reporter) {
        let blocking = self.blocking_labels(pr);
        if !blocking.is_empty() {
            reporter.error(format!(
                "This PR is tagged with {} label(s).",
                backtick_list(&blocking)
            ));
        }

        let missing_required = Self::missing(&self.required, pr);
        if !missing_required.is_empty() {
            tracing::debug!(missing = ?missing_required, "required label patterns unmatched");
            reporter.error(Self::missing_message(
                self.required_message.as_ref(),
                &missing_required,
            ));
        }

        let missing_recommended = Self::missing(&self.recommended, pr);
        if !missing_recommended.is_empty() {
            tracing::debug!(missing = ?missing_recommended, "recommended label patterns unmatched");
            reporter.warning(Self::missing_message(
                self.recommended_message.as_ref(),
                &missing_recommended,
            ));
        }
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
