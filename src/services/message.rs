// SPDX-License-Identifier: MIT

use crate::config::CommitTemplate;
use crate::domain::{ChangedFile, CommitMessage, CommitSuggestion};

/// Fixed per-category description phrases for the default logical groups.
const CATEGORY_DESCRIPTIONS: &[(&str, &str)] = &[
    ("API Changes", "add API endpoints and backend logic"),
    ("UI Components", "update UI components and layout"),
    ("Sanity Schema", "update content schemas and CMS structure"),
    ("Email Templates", "update email notification templates"),
    ("Documentation", "update project documentation"),
    ("Configuration", "update project configuration"),
    ("Tests", "update test coverage"),
    ("Styles", "update styling and design tokens"),
    ("Other", "update project files"),
];

const NEW_FILES_SUFFIX: &str = " - New Files";
const UPDATES_SUFFIX: &str = " - Updates";
const CLEANUP_SUFFIX: &str = " - Cleanup";

/// Renders a suggestion into conventional-commit header/body/footer.
///
/// Synthesis is pure: the same suggestion always yields the same message.
/// No line wrapping is applied.
pub struct MessageSynthesizer<'a> {
    template: &'a CommitTemplate,
}

impl<'a> MessageSynthesizer<'a> {
    pub fn new(template: &'a CommitTemplate) -> Self {
        Self { template }
    }

    pub fn synthesize(&self, suggestion: &CommitSuggestion) -> CommitMessage {
        let description = describe(&suggestion.category, &suggestion.files);

        let header = match &suggestion.scope {
            Some(scope) => format!(
                "{}({}): {}",
                suggestion.commit_type.as_str(),
                scope,
                description
            ),
            None => format!("{}: {}", suggestion.commit_type.as_str(), description),
        };

        CommitMessage {
            header,
            body: body_for(&suggestion.files),
            footer: self.template.footer.clone(),
        }
    }
}

/// Description phrase for a suggestion. Single-file suggestions name the
/// file; everything else uses the category lookup table.
fn describe(category: &str, files: &[ChangedFile]) -> String {
    if files.len() == 1 {
        let stem = files[0]
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("file");
        return format!("add {stem}");
    }

    if let Some((_, phrase)) = CATEGORY_DESCRIPTIONS.iter().find(|(name, _)| *name == category) {
        return (*phrase).to_string();
    }

    if let Some(base) = category.strip_suffix(NEW_FILES_SUFFIX) {
        return format!("add new files for {}", base.to_lowercase());
    }
    if let Some(base) = category.strip_suffix(UPDATES_SUFFIX) {
        return format!("update {}", base.to_lowercase());
    }
    if let Some(base) = category.strip_suffix(CLEANUP_SUFFIX) {
        return format!("remove unused files from {}", base.to_lowercase());
    }

    format!("update {}", category.to_lowercase())
}

/// Body listing files under per-kind headings, blank line between
/// non-empty groups.
fn body_for(files: &[ChangedFile]) -> String {
    let mut new_files = Vec::new();
    let mut modified_files = Vec::new();
    let mut deleted_files = Vec::new();

    for file in files {
        let line = format!("- {}", file.path_str());
        if file.status.is_new() {
            new_files.push(line);
        } else if file.status.is_removed() {
            deleted_files.push(line);
        } else {
            modified_files.push(line);
        }
    }

    let mut sections = Vec::new();
    for (heading, lines) in [
        ("New files:", new_files),
        ("Modified files:", modified_files),
        ("Deleted files:", deleted_files),
    ] {
        if !lines.is_empty() {
            sections.push(format!("{}\n{}", heading, lines.join("\n")));
        }
    }

    sections.join("\n\n")
}
