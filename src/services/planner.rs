// SPDX-License-Identifier: MIT

use tracing::debug;

use crate::config::{ChunkingRules, CommitConventions};
use crate::domain::{ChangedFile, CommitSuggestion, CommitType};
use crate::services::classifier::CategoryBucket;

/// Path-prefix fallbacks applied when no configured scope keyword matches.
const SCOPE_HEURISTICS: &[(&str, &str)] = &[
    ("src/components", "ui"),
    ("src/app/api", "api"),
    ("src/pages/api", "api"),
    ("sanity", "cms"),
    ("src/lib", "lib"),
];

/// Turns category buckets into commit suggestions.
///
/// Oversized categories are partitioned by change kind into up to three
/// suggestions; everything else becomes a single suggestion with type and
/// scope inferred from the file list.
pub struct CommitPlanner<'a> {
    chunking: &'a ChunkingRules,
    conventions: &'a CommitConventions,
}

impl<'a> CommitPlanner<'a> {
    pub fn new(chunking: &'a ChunkingRules, conventions: &'a CommitConventions) -> Self {
        Self {
            chunking,
            conventions,
        }
    }

    pub fn plan(&self, buckets: &[CategoryBucket]) -> Vec<CommitSuggestion> {
        let mut suggestions = Vec::new();

        for bucket in buckets {
            if bucket.files.is_empty() {
                continue;
            }

            if bucket.files.len() > self.chunking.max_files_per_commit {
                debug!(
                    category = %bucket.name,
                    files = bucket.files.len(),
                    threshold = self.chunking.max_files_per_commit,
                    "splitting oversized category by change kind"
                );
                suggestions.extend(self.split_bucket(bucket));
            } else {
                suggestions.push(self.suggest(
                    bucket.name.clone(),
                    bucket.files.clone(),
                    infer_commit_type(&bucket.files, CommitType::Feat),
                ));
            }
        }

        suggestions
    }

    /// Partition an oversized category into new/updated/deleted suggestions.
    /// Each partition is emitted only when non-empty; their union is exactly
    /// the bucket's file list.
    fn split_bucket(&self, bucket: &CategoryBucket) -> Vec<CommitSuggestion> {
        let mut added = Vec::new();
        let mut modified = Vec::new();
        let mut deleted = Vec::new();

        for file in &bucket.files {
            if file.status.is_new() {
                added.push(file.clone());
            } else if file.status.is_removed() {
                deleted.push(file.clone());
            } else {
                modified.push(file.clone());
            }
        }

        let mut suggestions = Vec::new();

        if !added.is_empty() {
            suggestions.push(self.suggest(
                format!("{} - New Files", bucket.name),
                added,
                CommitType::Feat,
            ));
        }
        if !modified.is_empty() {
            let commit_type = infer_commit_type(&modified, CommitType::Feat);
            suggestions.push(self.suggest(
                format!("{} - Updates", bucket.name),
                modified,
                commit_type,
            ));
        }
        if !deleted.is_empty() {
            suggestions.push(self.suggest(
                format!("{} - Cleanup", bucket.name),
                deleted,
                CommitType::Chore,
            ));
        }

        suggestions
    }

    fn suggest(
        &self,
        category: String,
        files: Vec<ChangedFile>,
        commit_type: CommitType,
    ) -> CommitSuggestion {
        let scope = self.infer_scope(&files);
        CommitSuggestion {
            category,
            commit_type,
            scope,
            files,
        }
    }

    /// Scope from configured keywords (declaration order, first match wins),
    /// falling back to path-prefix heuristics.
    pub fn infer_scope(&self, files: &[ChangedFile]) -> Option<String> {
        let joined = joined_paths(files);

        for scope in &self.conventions.scopes {
            if joined.contains(&scope.to_lowercase()) {
                return Some(scope.clone());
            }
        }

        for (prefix, scope) in SCOPE_HEURISTICS {
            if joined.contains(prefix) {
                return Some((*scope).to_string());
            }
        }

        None
    }
}

/// Infer the conventional-commit type from a file list.
///
/// Keyword checks run as case-insensitive substring tests against the joined
/// path list, in fixed precedence order; change-kind checks come after, and
/// the caller-supplied default last.
pub fn infer_commit_type(files: &[ChangedFile], default: CommitType) -> CommitType {
    let joined = joined_paths(files);

    if joined.contains("test") || joined.contains("spec") {
        return CommitType::Test;
    }
    if joined.contains("config") || joined.contains("package.json") {
        return CommitType::Build;
    }
    if joined.contains(".md") || joined.contains("readme") {
        return CommitType::Docs;
    }
    if joined.contains(".css") || joined.contains("style") {
        return CommitType::Style;
    }
    if joined.contains("fix") || joined.contains("bug") {
        return CommitType::Fix;
    }
    if files.iter().any(|f| f.status.is_new()) {
        return CommitType::Feat;
    }
    if files.iter().any(|f| f.status.is_removed()) {
        return CommitType::Chore;
    }

    default
}

fn joined_paths(files: &[ChangedFile]) -> String {
    files
        .iter()
        .map(|f| f.path_str().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
