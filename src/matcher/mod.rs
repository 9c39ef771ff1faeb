//! Reusable predicates shared by the checkers: regex sets, test-file
//! detection and class declaration scanning.

mod class;
mod pattern;
mod test_file;

pub use class::{ClassDeclaration, ClassDetector, InheritanceSyntax};
pub use pattern::PatternSet;
pub use test_file::{DEFAULT_TEST_PATH_PATTERNS, TestFileMatcher};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
