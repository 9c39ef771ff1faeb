use crate::Result;

use super::PatternSet;

/// Paths under a `test` or `androidTest` source set, Java or Kotlin.
pub const DEFAULT_TEST_PATH_PATTERNS: &[&str] = &[r"(^|/)(test|androidTest)/.*\.(java|kt)$"];

/// Decides whether a changed file is a test file.
#[derive(Debug, Clone)]
pub struct TestFileMatcher {
    patterns: PatternSet,
}

impl TestFileMatcher {
    #[must_use]
    pub const fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Compile a matcher from regex sources.
    ///
    /// # Errors
    /// Returns an error if a pattern is not a valid regex.
    pub fn from_patterns<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(PatternSet::new(sources)?))
    }

    #[must_use]
    pub fn is_test_file(&self, path: &str) -> bool {
        self.patterns.is_match(path)
    }
}

impl Default for TestFileMatcher {
    fn default() -> Self {
        Self::from_patterns(DEFAULT_TEST_PATH_PATTERNS).expect("Invalid regex")
    }
}
