// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use serde::Serialize;

/// Change kind of a single working-tree entry, as reported by
/// `git status --porcelain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Untracked,
}

impl ChangeStatus {
    /// Added and untracked files both introduce new content.
    pub fn is_new(self) -> bool {
        matches!(self, Self::Added | Self::Untracked)
    }

    pub fn is_removed(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// One changed path in the working tree. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedFile {
    pub status: ChangeStatus,
    pub path: PathBuf,
}

impl ChangedFile {
    pub fn new(status: ChangeStatus, path: impl Into<PathBuf>) -> Self {
        Self {
            status,
            path: path.into(),
        }
    }

    /// Path as a string for pattern matching and keyword heuristics.
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
