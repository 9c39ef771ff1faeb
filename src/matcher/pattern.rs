use regex::{Regex, RegexBuilder};

use crate::{PrGuardError, Result};

/// Ordered list of compiled regexes; a candidate matches the set if any
/// regex finds a match anywhere in it.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile case-sensitive patterns.
    ///
    /// # Errors
    /// Returns `InvalidRegex` naming the first pattern that fails to compile.
    pub fn new<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(sources, false)
    }

    /// Compile patterns that ignore letter case.
    ///
    /// # Errors
    /// Returns `InvalidRegex` naming the first pattern that fails to compile.
    pub fn case_insensitive<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(sources, true)
    }

    fn build<I, S>(sources: I, ignore_case: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = sources
            .into_iter()
            .map(|source| {
                let source = source.as_ref();
                RegexBuilder::new(source)
                    .case_insensitive(ignore_case)
                    .build()
                    .map_err(|e| PrGuardError::invalid_regex(source, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub const fn from_regexes(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(candidate))
    }

    /// Patterns that none of the candidates match, in declaration order.
    #[must_use]
    pub fn unmatched<'c, I>(&self, candidates: I) -> Vec<&Regex>
    where
        I: IntoIterator<Item = &'c str>,
        I::IntoIter: Clone,
    {
        let candidates = candidates.into_iter();
        self.patterns
            .iter()
            .filter(|p| !candidates.clone().any(|c| p.is_match(c)))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}
