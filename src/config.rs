// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{Error, Result};

pub const PROJECT_CONFIG_FILE: &str = ".autocommit.toml";

/// Gates applied after all commits are created and before any push.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoCommitPolicy {
    /// Run the test command after committing (default: true)
    #[serde(default = "default_true")]
    pub require_tests: bool,

    /// Run the build command after tests pass (default: true)
    #[serde(default = "default_true")]
    pub require_build: bool,
}

impl Default for AutoCommitPolicy {
    fn default() -> Self {
        Self {
            require_tests: true,
            require_build: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PushStrategy {
    /// Push to the current branch once tests and build have passed.
    #[default]
    AfterSuccessfulBuild,
    /// Never push; the user pushes by hand.
    Manual,
}

impl std::fmt::Display for PushStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AfterSuccessfulBuild => write!(f, "after-successful-build"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// A named bucket of glob patterns used to categorize changed files.
///
/// Declaration order is significant: the first group whose pattern matches
/// a path claims the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogicalGroup {
    pub name: String,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingRules {
    /// Categories larger than this get partitioned by change kind.
    #[serde(default = "default_max_files_per_commit")]
    pub max_files_per_commit: usize,

    #[serde(default = "default_logical_groups")]
    pub logical_groups: Vec<LogicalGroup>,
}

impl Default for ChunkingRules {
    fn default() -> Self {
        Self {
            max_files_per_commit: default_max_files_per_commit(),
            logical_groups: default_logical_groups(),
        }
    }
}

fn default_max_files_per_commit() -> usize {
    10
}

fn default_logical_groups() -> Vec<LogicalGroup> {
    let group = |name: &str, patterns: &[&str]| LogicalGroup {
        name: name.to_string(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
    };

    vec![
        group("API Changes", &["src/app/api/**", "src/pages/api/**"]),
        group("UI Components", &["src/components/**", "src/app/**/*.tsx"]),
        group("Sanity Schema", &["sanity/**", "src/sanity/**"]),
        group("Email Templates", &["emails/**", "src/emails/**"]),
        group("Tests", &["tests/**", "*.test.*", "*.spec.*"]),
        group("Styles", &["*.css", "*.scss", "src/styles/**"]),
        group("Documentation", &["*.md", "docs/**"]),
        group(
            "Configuration",
            &["*.json", "*.toml", "*.yaml", "*.yml", "*config*"],
        ),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitConventions {
    /// Scope keywords checked against file paths, in declaration order.
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
}

impl Default for CommitConventions {
    fn default() -> Self {
        Self {
            scopes: default_scopes(),
        }
    }
}

fn default_scopes() -> Vec<String> {
    ["api", "ui", "cms", "email", "auth"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitTemplate {
    /// Trailer appended verbatim to every commit message.
    #[serde(default)]
    pub footer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auto_commit: AutoCommitPolicy,

    #[serde(default = "default_test_command")]
    pub test_command: String,

    #[serde(default = "default_build_command")]
    pub build_command: String,

    #[serde(default)]
    pub push_strategy: PushStrategy,

    #[serde(default)]
    pub chunking: ChunkingRules,

    #[serde(default)]
    pub commit_conventions: CommitConventions,

    #[serde(default)]
    pub commit_template: CommitTemplate,
}

fn default_test_command() -> String {
    "npm test".into()
}

fn default_build_command() -> String {
    "npm run build".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_commit: AutoCommitPolicy::default(),
            test_command: default_test_command(),
            build_command: default_build_command(),
            push_strategy: PushStrategy::default(),
            chunking: ChunkingRules::default(),
            commit_conventions: CommitConventions::default(),
            commit_template: CommitTemplate::default(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > project config > user config > defaults.
    ///
    /// The project config file is required; its absence is a fatal startup
    /// error so that a repository never gets committed with rules it did not
    /// opt into.
    pub fn load(cli: &Cli, repo_root: &Path) -> Result<Self> {
        let project_config = cli
            .config
            .clone()
            .unwrap_or_else(|| repo_root.join(PROJECT_CONFIG_FILE));

        if !project_config.exists() {
            return Err(Error::ConfigMissing {
                path: project_config,
            });
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // User-level config (optional)
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        figment = figment.merge(Toml::file(&project_config));

        // Environment variables (AUTOCOMMIT_TEST_COMMAND, etc.)
        // Use __ separator for nested keys (e.g. AUTOCOMMIT_CHUNKING__MAX_FILES_PER_COMMIT)
        figment = figment.merge(Env::prefixed("AUTOCOMMIT_").split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "autocommit").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_files_per_commit == 0 {
            return Err(Error::Config(
                "chunking.max_files_per_commit must be at least 1".into(),
            ));
        }

        if self.chunking.logical_groups.is_empty() {
            return Err(Error::Config(
                "chunking.logical_groups cannot be empty".into(),
            ));
        }

        for group in &self.chunking.logical_groups {
            if group.name.trim().is_empty() {
                return Err(Error::Config("logical group name cannot be empty".into()));
            }
            if group.patterns.is_empty() {
                return Err(Error::Config(format!(
                    "logical group '{}' has no patterns",
                    group.name
                )));
            }
        }

        if self.auto_commit.require_tests && self.test_command.trim().is_empty() {
            return Err(Error::Config(
                "test_command cannot be empty when auto_commit.require_tests is set".into(),
            ));
        }

        if self.auto_commit.require_build && self.build_command.trim().is_empty() {
            return Err(Error::Config(
                "build_command cannot be empty when auto_commit.require_build is set".into(),
            ));
        }

        Ok(())
    }

    /// Create a commented starter config in the repository root.
    pub fn create_default(repo_root: &Path) -> Result<PathBuf> {
        let path = repo_root.join(PROJECT_CONFIG_FILE);
        let content = r#"# autocommit configuration

# Shell commands run after commits are created, before any push
test_command = "npm test"
build_command = "npm run build"

# after-successful-build | manual
push_strategy = "after-successful-build"

[auto_commit]
# Gate the push on the test command passing
require_tests = true
# Gate the push on the build command passing
require_build = true

[chunking]
# Categories with more files than this are split by change kind
max_files_per_commit = 10

# Logical groups are checked in order; the first matching pattern wins.
# '*' matches within a path segment, '**' matches across segments.
[[chunking.logical_groups]]
name = "API Changes"
patterns = ["src/app/api/**", "src/pages/api/**"]

[[chunking.logical_groups]]
name = "UI Components"
patterns = ["src/components/**", "src/app/**/*.tsx"]

[[chunking.logical_groups]]
name = "Tests"
patterns = ["tests/**", "*.test.*", "*.spec.*"]

[[chunking.logical_groups]]
name = "Documentation"
patterns = ["*.md", "docs/**"]

[[chunking.logical_groups]]
name = "Configuration"
patterns = ["*.json", "*.toml", "*.yaml", "*.yml", "*config*"]

[commit_conventions]
# Scope keywords matched against file paths, first match wins
scopes = ["api", "ui", "cms", "email", "auth"]

[commit_template]
# Trailer appended to every commit message
footer = ""
"#;

        fs::write(&path, content)?;
        Ok(path)
    }
}
