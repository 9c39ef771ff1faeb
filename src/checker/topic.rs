use indexmap::IndexSet;

use crate::diff::PullRequest;
use crate::matcher::PatternSet;
use crate::report::Reporter;

use super::Checker;

/// Appended to the instructions when the topic label is missing.
pub const DEFAULT_NO_LABEL_INSTRUCTION: &str = "\n- The PR must be assigned the **{label}** label.";

/// Separate error emitted when the topic label is missing.
pub const DEFAULT_NO_LABEL_MESSAGE: &str = "Please ensure the PR has the `{label}` label.";

/// Detects changes to a sensitive topic (analytics events, migrations, ...)
/// and asks for the matching review steps.
///
/// A PR touches the topic when it changes one of `sensitive_files` (exact
/// path) or when an added or removed line matches one of the content
/// patterns.
#[derive(Debug, Clone)]
pub struct TopicChangeCheck {
    topic: String,
    sensitive_files: IndexSet<String>,
    content: PatternSet,
    label: Option<String>,
    instructions: String,
    no_label_instruction: String,
    no_label_message: String,
}

impl TopicChangeCheck {
    #[must_use]
    pub fn new(topic: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            sensitive_files: IndexSet::new(),
            content: PatternSet::default(),
            label: None,
            instructions: instructions.into(),
            no_label_instruction: DEFAULT_NO_LABEL_INSTRUCTION.to_string(),
            no_label_message: DEFAULT_NO_LABEL_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sensitive_files = files.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_content(mut self, patterns: PatternSet) -> Self {
        self.content = patterns;
        self
    }

    /// Require `label` on PRs that touch the topic. An empty label means no
    /// label is required.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }

    /// Override the templates used when the label is missing. `{label}` is
    /// replaced with the label name.
    #[must_use]
    pub fn with_no_label_templates(
        mut self,
        instruction: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.no_label_instruction = instruction.into();
        self.no_label_message = message.into();
        self
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// True if the PR changes a sensitive file or a matching line.
    #[must_use]
    pub fn is_touched(&self, pr: &PullRequest) -> bool {
        if let Some(file) = pr
            .files()
            .iter()
            .find(|file| self.sensitive_files.contains(file.path()))
        {
            tracing::debug!(topic = %self.topic, path = file.path(), "sensitive file changed");
            return true;
        }

        if self.content.is_empty() {
            return false;
        }
        pr.files().iter().any(|file| {
            file.lines()
                .iter()
                .filter(|line| line.is_change())
                .any(|line| self.content.is_match(&line.text))
        })
    }
}

impl Checker for TopicChangeCheck {
    fn name(&self) -> &'static str {
        "topic-change"
    }

    fn check(&self, pr: &PullRequest, reporter: &mut dyn Reporter) {
        if !self.is_touched(pr) {
            return;
        }

        let Some(label) = self.label.as_deref().filter(|label| !pr.has_label(label)) else {
            reporter.info(self.instructions.clone());
            return;
        };

        tracing::debug!(topic = %self.topic, label, "topic label missing");
        reporter.error(format!(
            "{}{}",
            self.instructions,
            fill_label(&self.no_label_instruction, label)
        ));
        reporter.error(fill_label(&self.no_label_message, label));
    }
}

fn fill_label(template: &str, label: &str) -> String {
    template.replace("{label}", label)
}

#[cfg(test)]
#[path = "topic_tests.rs"]
mod tests;
