// SPDX-License-Identifier: MIT

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Not a git repository")]
    #[diagnostic(
        code(autocommit::git::not_repo),
        help("Run this command inside a git repository")
    )]
    NotAGitRepo,

    #[error("Merge in progress")]
    #[diagnostic(
        code(autocommit::git::merge),
        help("Complete or abort the merge: git merge --abort")
    )]
    MergeInProgress,

    #[error("No config file found at {}", path.display())]
    #[diagnostic(
        code(autocommit::config::missing),
        help("Create one with: autocommit init")
    )]
    ConfigMissing { path: PathBuf },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(autocommit::config::error))]
    Config(String),

    #[error("Invalid pattern '{pattern}' in group '{group}': {message}")]
    #[diagnostic(
        code(autocommit::classify::bad_pattern),
        help("Patterns support '*' (within a path segment) and '**' (across segments)")
    )]
    Pattern {
        group: String,
        pattern: String,
        message: String,
    },

    #[error("Git error: {0}")]
    #[diagnostic(code(autocommit::git::error))]
    Git(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
