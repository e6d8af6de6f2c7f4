// SPDX-License-Identifier: MIT

use autocommit::config::LogicalGroup;
use autocommit::domain::{ChangeStatus, ChangedFile};

/// Create a ChangedFile for testing
#[allow(dead_code)]
pub fn file(path: &str, status: ChangeStatus) -> ChangedFile {
    ChangedFile::new(status, path)
}

/// Create a LogicalGroup for testing
#[allow(dead_code)]
pub fn group(name: &str, patterns: &[&str]) -> LogicalGroup {
    LogicalGroup {
        name: name.to_string(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
    }
}

/// Logical groups resembling a small web project
#[allow(dead_code)]
pub fn sample_groups() -> Vec<LogicalGroup> {
    vec![
        group("API Changes", &["src/app/api/**", "src/pages/api/**"]),
        group("UI Components", &["src/components/**"]),
        group("Tests", &["tests/**", "*.test.*"]),
        group("Documentation", &["*.md", "docs/**"]),
        group("Configuration", &["*.json", "*.toml"]),
    ]
}
