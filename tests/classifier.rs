// SPDX-License-Identifier: MIT

mod helpers;

use autocommit::domain::ChangeStatus;
use autocommit::services::classifier::{Classifier, OTHER_CATEGORY, glob_to_regex};
use helpers::{file, group, sample_groups};
use proptest::prelude::*;

// ─── Glob conversion ─────────────────────────────────────────────────────────

#[test]
fn double_star_crosses_separators() {
    let re = glob_to_regex("src/app/api/**").unwrap();
    assert!(re.is_match("src/app/api/route.ts"));
    assert!(re.is_match("src/app/api/v2/users/route.ts"));
    assert!(!re.is_match("src/app/pages/route.ts"));
}

#[test]
fn single_star_stays_within_segment() {
    let re = glob_to_regex("src/*.ts").unwrap();
    assert!(re.is_match("src/index.ts"));
    assert!(!re.is_match("src/nested/index.ts"));
}

#[test]
fn literal_dot_is_escaped() {
    let re = glob_to_regex("*.md").unwrap();
    assert!(re.is_match("README.md"));
    assert!(re.is_match("docs/guide.md"));
    assert!(!re.is_match("README_md"));
}

#[test]
fn regex_metacharacters_match_literally() {
    let re = glob_to_regex("src/(v1)/file+name.ts").unwrap();
    assert!(re.is_match("src/(v1)/file+name.ts"));
    assert!(!re.is_match("src/v1/filename.ts"));
}

#[test]
fn match_is_unanchored() {
    // Preserves the original loose substring semantics: a bare extension
    // pattern matches the file at any depth.
    let re = glob_to_regex("*.css").unwrap();
    assert!(re.is_match("src/styles/globals.css"));
}

// ─── Classification ──────────────────────────────────────────────────────────

#[test]
fn first_group_wins_on_overlap() {
    // README.md matches both groups; the one declared first claims it
    let groups = vec![
        group("Docs A", &["*.md"]),
        group("Docs B", &["README*"]),
    ];
    let classifier = Classifier::new(&groups).unwrap();
    assert_eq!(classifier.category_for("README.md"), "Docs A");
}

#[test]
fn declaration_order_is_respected_when_reversed() {
    let groups = vec![
        group("Docs B", &["README*"]),
        group("Docs A", &["*.md"]),
    ];
    let classifier = Classifier::new(&groups).unwrap();
    assert_eq!(classifier.category_for("README.md"), "Docs B");
}

#[test]
fn unmatched_path_falls_into_other() {
    let classifier = Classifier::new(&sample_groups()).unwrap();
    assert_eq!(classifier.category_for("Makefile"), OTHER_CATEGORY);
}

#[test]
fn classify_buckets_in_declaration_order_with_other_last() {
    let classifier = Classifier::new(&sample_groups()).unwrap();
    let files = vec![
        file("Makefile", ChangeStatus::Modified),
        file("docs/guide.md", ChangeStatus::Modified),
        file("src/app/api/route.ts", ChangeStatus::Added),
    ];

    let buckets = classifier.classify(files);
    let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["API Changes", "Documentation", OTHER_CATEGORY]);
}

#[test]
fn empty_buckets_are_dropped() {
    let classifier = Classifier::new(&sample_groups()).unwrap();
    let files = vec![file("src/components/Button.tsx", ChangeStatus::Modified)];

    let buckets = classifier.classify(files);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].name, "UI Components");
}

#[test]
fn api_and_readme_scenario() {
    let classifier = Classifier::new(&sample_groups()).unwrap();
    let files = vec![
        file("src/app/api/x.ts", ChangeStatus::Modified),
        file("README.md", ChangeStatus::Modified),
    ];

    let buckets = classifier.classify(files);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].name, "API Changes");
    assert_eq!(buckets[0].files.len(), 1);
    assert_eq!(buckets[1].name, "Documentation");
    assert_eq!(buckets[1].files.len(), 1);
}

// ─── Totality and uniqueness ─────────────────────────────────────────────────

fn path_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}(/[a-z]{1,8}){0,3}(\\.[a-z]{1,4})?").unwrap()
}

proptest! {
    #[test]
    fn every_file_lands_in_exactly_one_bucket(paths in proptest::collection::vec(path_strategy(), 1..30)) {
        let classifier = Classifier::new(&sample_groups()).unwrap();
        let files: Vec<_> = paths
            .iter()
            .map(|p| file(p, ChangeStatus::Modified))
            .collect();
        let total = files.len();

        let buckets = classifier.classify(files.clone());

        let bucketed: usize = buckets.iter().map(|b| b.files.len()).sum();
        prop_assert_eq!(bucketed, total);

        for f in &files {
            let holders = buckets
                .iter()
                .filter(|b| b.files.contains(f))
                .count();
            prop_assert!(holders >= 1, "file {:?} lost during classification", f.path);
        }
    }

    #[test]
    fn classification_is_deterministic(paths in proptest::collection::vec(path_strategy(), 0..20)) {
        let classifier = Classifier::new(&sample_groups()).unwrap();
        let files: Vec<_> = paths
            .iter()
            .map(|p| file(p, ChangeStatus::Added))
            .collect();

        let first = classifier.classify(files.clone());
        let second = classifier.classify(files);

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(&a.name, &b.name);
            prop_assert_eq!(&a.files, &b.files);
        }
    }
}
