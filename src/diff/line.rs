use serde::Serialize;

/// Role of a line inside a unified diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Added,
    Removed,
    Context,
}

/// A single classified line of a patch.
///
/// `text` holds the line content with the diff marker (`+`, `-` or the
/// leading context space) stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub change: ChangeType,
    pub text: String,
}

impl DiffLine {
    #[must_use]
    pub fn new(change: ChangeType, text: impl Into<String>) -> Self {
        Self {
            change,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn added(text: impl Into<String>) -> Self {
        Self::new(ChangeType::Added, text)
    }

    #[must_use]
    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(ChangeType::Removed, text)
    }

    #[must_use]
    pub fn context(text: impl Into<String>) -> Self {
        Self::new(ChangeType::Context, text)
    }

    /// Classify one line that appears inside a hunk.
    ///
    /// Only the first character is looked at, so `+-x` or `--i` lines that are
    /// code starting with an operator still classify correctly.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix('+') {
            Self::added(rest)
        } else if let Some(rest) = raw.strip_prefix('-') {
            Self::removed(rest)
        } else {
            Self::context(raw.strip_prefix(' ').unwrap_or(raw))
        }
    }

    #[must_use]
    pub const fn is_added(&self) -> bool {
        matches!(self.change, ChangeType::Added)
    }

    #[must_use]
    pub const fn is_removed(&self) -> bool {
        matches!(self.change, ChangeType::Removed)
    }

    /// True for added or removed lines.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self.change, ChangeType::Context)
    }
}

/// Split the patch text of one file into classified lines.
///
/// `+++`/`---` lines are treated as file headers only before the first `@@`
/// hunk header. Anything unrecognised is context, so malformed input never
/// fails; at worst it yields context lines.
#[must_use]
pub fn parse_patch(patch: &str) -> Vec<DiffLine> {
    let mut in_hunk = false;
    patch
        .lines()
        .map(|raw| {
            if raw.starts_with("@@") {
                in_hunk = true;
                return DiffLine::context(raw);
            }
            if !in_hunk && (raw.starts_with("+++") || raw.starts_with("---")) {
                return DiffLine::context(raw);
            }
            DiffLine::classify(raw)
        })
        .collect()
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
