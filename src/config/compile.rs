use crate::checker::{
    BodyLengthCheck, CheckSuite, DiffSizeCheck, FileSelector, LabelCheck, LockfileCheck,
    MissingTestsCheck, TopicChangeCheck,
};
use crate::error::Result;
use crate::matcher::{PatternSet, TestFileMatcher};

use super::model::{
    BodyConfig, Config, LabelsConfig, LockfileConfig, MissingTestsConfig, SizeConfig, TopicConfig,
};

impl Config {
    /// Compile every configured section into a runnable suite.
    ///
    /// Checks run in a fixed order: size, body, labels, missing tests, then
    /// topics and lockfile rules in file order.
    ///
    /// # Errors
    /// Returns an error naming the first regex or glob that fails to compile.
    pub fn build_suite(&self) -> Result<CheckSuite> {
        let mut suite = CheckSuite::new();

        if let Some(size) = &self.size {
            suite.push(size_check(size)?);
        }
        if let Some(body) = &self.body {
            suite.push(body_check(body));
        }
        if let Some(labels) = &self.labels {
            suite.push(label_check(labels)?);
        }
        if let Some(missing_tests) = &self.missing_tests {
            suite.push(missing_tests_check(missing_tests)?);
        }
        for topic in &self.topics {
            suite.push(topic_check(topic)?);
        }
        for rule in &self.lockfiles {
            suite.push(lockfile_check(rule));
        }

        let names: Vec<&str> = suite.names().collect();
        tracing::debug!(checks = ?names, "compiled check suite");
        Ok(suite)
    }
}

fn size_check(config: &SizeConfig) -> Result<DiffSizeCheck> {
    let mut check = DiffSizeCheck::new(config.max_lines)
        .with_metric(config.metric)
        .with_severity(config.severity);
    if config.has_file_filter() {
        check = check.with_selector(FileSelector::from_globs(&config.include, &config.exclude)?);
    }
    if let Some(message) = &config.message {
        check = check.with_message(message.clone());
    }
    Ok(check)
}

fn body_check(config: &BodyConfig) -> BodyLengthCheck {
    let check = BodyLengthCheck::new(config.min_length).with_severity(config.severity);
    match &config.message {
        Some(message) => check.with_message(message.clone()),
        None => check,
    }
}

fn label_check(config: &LabelsConfig) -> Result<LabelCheck> {
    Ok(LabelCheck::new()
        .with_do_not_merge(config.do_not_merge.iter().cloned())
        .with_required(
            PatternSet::new(&config.required)?,
            config.required_message.clone(),
        )
        .with_recommended(
            PatternSet::new(&config.recommended)?,
            config.recommended_message.clone(),
        ))
}

fn missing_tests_check(config: &MissingTestsConfig) -> Result<MissingTestsCheck> {
    Ok(MissingTestsCheck::new(
        TestFileMatcher::from_patterns(&config.test_paths)?,
        PatternSet::new(&config.class_exceptions)?,
        PatternSet::new(&config.subclass_exceptions)?,
        config.bypass_label.clone(),
    ))
}

fn topic_check(config: &TopicConfig) -> Result<TopicChangeCheck> {
    let mut check = TopicChangeCheck::new(config.name.clone(), config.instructions())
        .with_files(config.files.iter().cloned())
        .with_content(PatternSet::new(&config.content)?)
        .with_no_label_templates(
            config.no_label_instruction.clone(),
            config.no_label_message.clone(),
        );
    if let Some(label) = &config.label {
        check = check.with_label(label.clone());
    }
    Ok(check)
}

fn lockfile_check(config: &LockfileConfig) -> LockfileCheck {
    let check = LockfileCheck::new(config.manifest.clone(), config.lockfile.clone())
        .with_severity(config.severity);
    match &config.message {
        Some(message) => check.with_message(message.clone()),
        None => check,
    }
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
