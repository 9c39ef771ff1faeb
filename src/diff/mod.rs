mod input;
mod line;
mod snapshot;

pub use line::{ChangeType, DiffLine, parse_patch};
pub use snapshot::{DiffStats, FileDiff, PullRequest};
