// SPDX-License-Identifier: MIT

use autocommit::config::{Config, PushStrategy};

// ─── Default values ──────────────────────────────────────────────────────────

#[test]
fn default_config_values() {
    let config = Config::default();
    assert!(config.auto_commit.require_tests);
    assert!(config.auto_commit.require_build);
    assert_eq!(config.test_command, "npm test");
    assert_eq!(config.build_command, "npm run build");
    assert_eq!(config.push_strategy, PushStrategy::AfterSuccessfulBuild);
    assert_eq!(config.chunking.max_files_per_commit, 10);
    assert!(!config.chunking.logical_groups.is_empty());
    assert!(!config.commit_conventions.scopes.is_empty());
    assert!(config.commit_template.footer.is_empty());
    config.validate().unwrap();
}

// ─── TOML deserialization ────────────────────────────────────────────────────

#[test]
fn load_from_valid_toml() {
    let toml_str = r#"
test_command = "cargo test"
build_command = "cargo build"
push_strategy = "manual"

[auto_commit]
require_tests = false
require_build = true

[chunking]
max_files_per_commit = 5

[[chunking.logical_groups]]
name = "Core"
patterns = ["src/**"]

[commit_conventions]
scopes = ["core"]

[commit_template]
footer = "Reviewed-by: nobody"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(!config.auto_commit.require_tests);
    assert!(config.auto_commit.require_build);
    assert_eq!(config.test_command, "cargo test");
    assert_eq!(config.push_strategy, PushStrategy::Manual);
    assert_eq!(config.chunking.max_files_per_commit, 5);
    assert_eq!(config.chunking.logical_groups.len(), 1);
    assert_eq!(config.chunking.logical_groups[0].name, "Core");
    assert_eq!(config.commit_conventions.scopes, vec!["core".to_string()]);
    assert_eq!(config.commit_template.footer, "Reviewed-by: nobody");
}

#[test]
fn load_partial_toml_uses_defaults() {
    let toml_str = r#"test_command = "make check""#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.test_command, "make check");
    assert_eq!(config.build_command, "npm run build");
    assert_eq!(config.chunking.max_files_per_commit, 10);
    assert!(!config.chunking.logical_groups.is_empty());
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn zero_threshold_is_rejected() {
    let mut config = Config::default();
    config.chunking.max_files_per_commit = 0;
    assert!(config.validate().is_err());
}

#[test]
fn empty_group_list_is_rejected() {
    let mut config = Config::default();
    config.chunking.logical_groups.clear();
    assert!(config.validate().is_err());
}

#[test]
fn group_without_patterns_is_rejected() {
    let mut config = Config::default();
    config.chunking.logical_groups[0].patterns.clear();
    assert!(config.validate().is_err());
}

#[test]
fn empty_test_command_is_rejected_when_gate_enabled() {
    let mut config = Config::default();
    config.test_command = "  ".into();
    assert!(config.validate().is_err());

    config.auto_commit.require_tests = false;
    config.validate().unwrap();
}

#[test]
fn empty_build_command_is_rejected_when_gate_enabled() {
    let mut config = Config::default();
    config.build_command = String::new();
    assert!(config.validate().is_err());

    config.auto_commit.require_build = false;
    config.validate().unwrap();
}
