// SPDX-License-Identifier: MIT

use regex::Regex;

use crate::config::LogicalGroup;
use crate::domain::ChangedFile;
use crate::error::{Error, Result};

/// Catch-all category for files no logical group claims.
pub const OTHER_CATEGORY: &str = "Other";

/// Files belonging to one category, in input order.
#[derive(Debug, Clone)]
pub struct CategoryBucket {
    pub name: String,
    pub files: Vec<ChangedFile>,
}

struct CompiledGroup {
    name: String,
    patterns: Vec<Regex>,
}

/// Greedy, order-sensitive path classifier.
///
/// Groups are tried in declaration order, patterns within a group likewise;
/// the first matching pattern assigns the file. Unmatched files fall into
/// [`OTHER_CATEGORY`].
pub struct Classifier {
    groups: Vec<CompiledGroup>,
}

impl Classifier {
    pub fn new(groups: &[LogicalGroup]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(groups.len());

        for group in groups {
            let mut patterns = Vec::with_capacity(group.patterns.len());
            for pattern in &group.patterns {
                let regex = glob_to_regex(pattern).map_err(|e| Error::Pattern {
                    group: group.name.clone(),
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
                patterns.push(regex);
            }
            compiled.push(CompiledGroup {
                name: group.name.clone(),
                patterns,
            });
        }

        Ok(Self { groups: compiled })
    }

    /// Category name for a single path. First matching group wins.
    pub fn category_for(&self, path: &str) -> &str {
        for group in &self.groups {
            if group.patterns.iter().any(|re| re.is_match(path)) {
                return &group.name;
            }
        }
        OTHER_CATEGORY
    }

    /// Bucket files by category, preserving group declaration order.
    /// The catch-all bucket, when non-empty, always comes last.
    /// Empty buckets are dropped.
    pub fn classify(&self, files: Vec<ChangedFile>) -> Vec<CategoryBucket> {
        let mut buckets: Vec<CategoryBucket> = self
            .groups
            .iter()
            .map(|g| CategoryBucket {
                name: g.name.clone(),
                files: Vec::new(),
            })
            .collect();
        let mut other = CategoryBucket {
            name: OTHER_CATEGORY.to_string(),
            files: Vec::new(),
        };

        for file in files {
            let category = self.category_for(&file.path_str());
            match buckets.iter_mut().find(|b| b.name == category) {
                Some(bucket) => bucket.files.push(file),
                None => other.files.push(file),
            }
        }

        buckets.push(other);
        buckets.retain(|b| !b.files.is_empty());
        buckets
    }
}

/// Convert a glob pattern to a regex.
///
/// `**` matches anything including path separators, `*` matches anything
/// within a single path segment. Everything else is matched literally.
/// The resulting regex is unanchored, so a pattern like `*.md` matches a
/// markdown file at any depth.
pub fn glob_to_regex(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    let mut re = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    re.push_str(".*");
                } else {
                    re.push_str("[^/]*");
                }
            }
            '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '?' | '\\' => {
                re.push('\\');
                re.push(c);
            }
            _ => re.push(c),
        }
    }

    Regex::new(&re)
}
