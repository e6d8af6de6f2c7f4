// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{ChangeStatus, ChangedFile};
use crate::error::{Error, Result};

pub struct GitService {
    repo: gix::Repository,
    work_dir: PathBuf,
}

impl GitService {
    pub fn discover() -> Result<Self> {
        let repo = gix::discover(".").map_err(|_| Error::NotAGitRepo)?;

        let work_dir = repo
            .work_dir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();

        Ok(Self { repo, work_dir })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn check_state(&self) -> Result<()> {
        // Check for merge/rebase in progress
        let state = self.repo.state();
        if matches!(state, Some(gix::state::InProgress::Merge)) {
            return Err(Error::MergeInProgress);
        }
        Ok(())
    }

    /// Enumerate working-tree changes via `git status --porcelain`.
    ///
    /// Fails open: a status command that cannot run or exits non-zero is
    /// logged and reported as "no changes".
    pub async fn changed_files(&self) -> Vec<ChangedFile> {
        // --untracked-files=all so untracked directories are listed per file
        let output = tokio::process::Command::new("git")
            .args(["status", "--porcelain", "--untracked-files=all"])
            .current_dir(&self.work_dir)
            .output()
            .await;

        let output = match output {
            Ok(o) => o,
            Err(e) => {
                warn!(error = %e, "failed to run git status, treating as no changes");
                return Vec::new();
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(stderr = %stderr, "git status failed, treating as no changes");
            return Vec::new();
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let files = parse_porcelain(&stdout);
        debug!(count = files.len(), "working-tree changes enumerated");
        files
    }
}

/// Parse `git status --porcelain` output into changed files.
///
/// Each line is `XY path` where `XY` is the two-character status code.
/// For renames the path field is `old -> new`; the new path is kept.
pub fn parse_porcelain(output: &str) -> Vec<ChangedFile> {
    let mut files = Vec::new();

    for line in output.lines() {
        if line.len() < 4 {
            continue;
        }

        let code = &line[..2];
        let mut path = line[3..].trim();

        let status = if code == "??" {
            ChangeStatus::Untracked
        } else if code.contains('R') {
            if let Some((_, new_path)) = path.split_once(" -> ") {
                path = new_path.trim();
            }
            ChangeStatus::Renamed
        } else if code.contains('A') {
            ChangeStatus::Added
        } else if code.contains('D') {
            ChangeStatus::Deleted
        } else if code.contains('M') || code.contains('T') {
            ChangeStatus::Modified
        } else {
            // Ignored entries ("!!") and unmerged states are skipped
            debug!(code, path, "skipping unsupported status code");
            continue;
        };

        // Paths with special characters come back quoted
        let path = path.trim_matches('"');
        if path.is_empty() {
            continue;
        }

        files.push(ChangedFile::new(status, path));
    }

    files
}
