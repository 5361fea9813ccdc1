use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to a changeset opened on a [`Fixer`](crate::fixer::Fixer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChangesetId(pub usize);

impl fmt::Display for ChangesetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One token-level edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub index: usize,
    pub kind: EditKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op", content = "text")]
pub enum EditKind {
    /// Substitute the token text.
    Replace(String),
    /// Splice text in front of the token.
    InsertBefore(String),
    /// Splice text behind the token.
    InsertAfter(String),
    /// Drop the token text.
    Delete,
}

impl Edit {
    pub fn replace(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            kind: EditKind::Replace(text.into()),
        }
    }

    pub fn insert_before(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            kind: EditKind::InsertBefore(text.into()),
        }
    }

    pub fn insert_after(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            kind: EditKind::InsertAfter(text.into()),
        }
    }

    pub fn delete(index: usize) -> Self {
        Self {
            index,
            kind: EditKind::Delete,
        }
    }

    /// Render the token text with this edit applied.
    pub fn apply(&self, original: &str, out: &mut String) {
        match &self.kind {
            EditKind::Replace(text) => out.push_str(text),
            EditKind::InsertBefore(text) => {
                out.push_str(text);
                out.push_str(original);
            }
            EditKind::InsertAfter(text) => {
                out.push_str(original);
                out.push_str(text);
            }
            EditKind::Delete => {}
        }
    }
}

/// Where a reported violation stands with respect to fixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixStatus {
    /// Reported through `add_error`; no fix exists.
    NotFixable,
    /// Fixable, but no changeset was staged (check mode, or the fix was empty).
    Unattempted,
    /// A changeset is waiting for commit.
    Staged,
    /// The fix lost a token claim to another changeset this pass.
    Conflicted,
    /// The fix targeted a token outside the buffer.
    Invalid,
    /// The changeset was applied to the output text.
    Fixed,
}

impl FixStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixStatus::NotFixable => "not_fixable",
            FixStatus::Unattempted => "unattempted",
            FixStatus::Staged => "staged",
            FixStatus::Conflicted => "conflicted",
            FixStatus::Invalid => "invalid",
            FixStatus::Fixed => "fixed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub rule: String,
    pub message: String,
    pub token_index: usize,
    pub line: u32,
    pub column: u32,
    pub fixable: bool,
    pub status: FixStatus,
}

/// Final result of running the engine over one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    /// Best text produced. Equals the input when nothing was fixed.
    pub fixed_text: String,
    /// Whether `fixed_text` differs from the input.
    pub changed: bool,
    /// Violations from the last pass that ran.
    pub violations: Vec<Violation>,
    pub passes: u32,
    pub stabilized: bool,
    /// Set when the file did not reach a fixed point.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub warning: Option<String>,
}

impl FileReport {
    /// Violations the last pass could not resolve.
    pub fn unresolved(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.status != FixStatus::Fixed)
    }
}

/// Failures raised while staging or committing edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    #[error("edit staged outside an open changeset")]
    UnscopedEdit,

    #[error("token {index} is already claimed by changeset {held_by}")]
    EditConflict { index: usize, held_by: ChangesetId },

    #[error("token {index} is outside the buffer (length {len})")]
    InvalidEditTarget { index: usize, len: usize },
}

impl FixError {
    /// Status a violation takes when its fix failed with this error.
    pub fn status(&self) -> FixStatus {
        match self {
            FixError::EditConflict { .. } => FixStatus::Conflicted,
            FixError::InvalidEditTarget { .. } | FixError::UnscopedEdit => FixStatus::Invalid,
        }
    }
}
