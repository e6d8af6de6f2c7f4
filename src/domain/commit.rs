// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::domain::ChangedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Test,
    Build,
    Chore,
}

impl CommitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Test => "test",
            Self::Build => "build",
            Self::Chore => "chore",
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A planned commit covering one category (or one split of a category).
///
/// Invariant: `files` is never empty.
#[derive(Debug, Clone, Serialize)]
pub struct CommitSuggestion {
    pub category: String,
    pub commit_type: CommitType,
    pub scope: Option<String>,
    pub files: Vec<ChangedFile>,
}

/// Conventional-commit message parts. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    pub header: String,
    pub body: String,
    pub footer: String,
}

impl CommitMessage {
    /// Full message as git would record it.
    #[allow(dead_code)]
    pub fn full(&self) -> String {
        let mut parts = vec![self.header.clone()];
        if !self.body.is_empty() {
            parts.push(self.body.clone());
        }
        if !self.footer.is_empty() {
            parts.push(self.footer.clone());
        }
        parts.join("\n\n")
    }
}

/// A suggestion paired with its synthesized message.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedCommit {
    #[serde(flatten)]
    pub suggestion: CommitSuggestion,
    pub message: CommitMessage,
}

/// The complete plan for one run, as printed by `analyze --json`.
#[derive(Debug, Clone, Serialize)]
pub struct CommitPlan {
    pub suggestions: Vec<PlannedCommit>,
}

impl CommitPlan {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
