// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message style and branch naming inference.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::report::{BranchConvention, CommitConvention, CommitStyle, GitConventions};

/// How many conventional types are reported.
const MAX_TYPES: usize = 8;
/// How often a branch prefix must occur to count.
const MIN_PREFIX_COUNT: usize = 2;

lazy_static! {
    static ref CONVENTIONAL: Regex = Regex::new(
        r"^(feat|fix|docs|style|refactor|test|chore|perf|ci|build|revert)(\([^)]+\))?!?:\s"
    )
    .unwrap();
    static ref GITMOJI_CODE: Regex = Regex::new(r"^:[a-z0-9_+-]+:").unwrap();
}

/// Whether a message starts with a gitmoji, either as a `:code:` or a glyph.
pub fn is_gitmoji(message: &str) -> bool {
    if GITMOJI_CODE.is_match(message) {
        return true;
    }
    message.chars().next().is_some_and(|c| {
        matches!(
            c as u32,
            0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2300..=0x23FF | 0x2B00..=0x2BFF
        )
    })
}

/// Infer commit and branch conventions from history samples.
pub fn detect_git_conventions(commits: &[String], branches: &[String]) -> GitConventions {
    GitConventions {
        commit: detect_commit_convention(commits),
        branch: detect_branch_convention(branches),
    }
}

/// Infer the commit message style. `None` when there are no messages.
pub fn detect_commit_convention(commits: &[String]) -> Option<CommitConvention> {
    if commits.is_empty() {
        return None;
    }

    // (type, count) in order of first appearance
    let mut types: Vec<(String, usize)> = Vec::new();
    let mut conventional = 0usize;
    for message in commits {
        if let Some(caps) = CONVENTIONAL.captures(message) {
            conventional += 1;
            let ty = &caps[1];
            match types.iter_mut().find(|(t, _)| t == ty) {
                Some((_, count)) => *count += 1,
                None => types.push((ty.to_string(), 1)),
            }
        }
    }

    let at_least_half = |count: usize| count * 2 >= commits.len();

    let style = if at_least_half(conventional) {
        CommitStyle::Conventional
    } else if at_least_half(commits.iter().filter(|m| is_gitmoji(m)).count()) {
        CommitStyle::Gitmoji
    } else {
        CommitStyle::Freeform
    };

    let types = if style == CommitStyle::Conventional {
        // Stable sort keeps first-seen order among equal counts
        types.sort_by(|a, b| b.1.cmp(&a.1));
        types.into_iter().take(MAX_TYPES).map(|(t, _)| t).collect()
    } else {
        Vec::new()
    };

    tracing::debug!(
        "Commit style {} ({} of {} conventional)",
        style.as_str(),
        conventional,
        commits.len()
    );

    Some(CommitConvention {
        style,
        format: style.format().to_string(),
        types,
    })
}

/// Infer branch prefixes used at least twice, most common first.
pub fn detect_branch_convention(branches: &[String]) -> Option<BranchConvention> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for branch in branches {
        if let Some((prefix, _)) = branch.split_once('/') {
            let count = counts.entry(prefix).or_insert(0);
            if *count == 0 {
                first_seen.push(prefix);
            }
            *count += 1;
        }
    }

    let mut prefixes: Vec<&str> = first_seen
        .into_iter()
        .filter(|p| counts[p] >= MIN_PREFIX_COUNT)
        .collect();
    prefixes.sort_by(|a, b| counts[b].cmp(&counts[a]));

    if prefixes.is_empty() {
        None
    } else {
        Some(BranchConvention {
            prefixes: prefixes.into_iter().map(String::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_conventional_commits() {
        let commits = strings(&[
            "feat(api): x",
            "fix(auth): y",
            "docs: z",
            "feat(cli): q",
            "chore: r",
            "fix(api): s",
            "feat: t",
            "test: u",
        ]);
        let convention = detect_commit_convention(&commits).unwrap();
        assert_eq!(convention.style, CommitStyle::Conventional);
        assert_eq!(convention.format, "<type>(<scope>): <subject>");
        assert_eq!(convention.types, vec!["feat", "fix", "docs", "chore", "test"]);
    }

    #[test]
    fn test_breaking_change_marker() {
        let commits = strings(&["feat!: drop node 16", "refactor(core)!: rename"]);
        let convention = detect_commit_convention(&commits).unwrap();
        assert_eq!(convention.style, CommitStyle::Conventional);
        assert_eq!(convention.types, vec!["feat", "refactor"]);
    }

    #[test]
    fn test_exactly_half_is_conventional() {
        let commits = strings(&["feat: a", "Update readme"]);
        assert_eq!(
            detect_commit_convention(&commits).unwrap().style,
            CommitStyle::Conventional
        );
    }

    #[test]
    fn test_missing_space_is_not_conventional() {
        let commits = strings(&["feat:a", "fix:b", "Feature: c"]);
        assert_eq!(
            detect_commit_convention(&commits).unwrap().style,
            CommitStyle::Freeform
        );
    }

    #[test]
    fn test_types_capped() {
        let commits = strings(&[
            "feat: a", "fix: a", "docs: a", "style: a", "refactor: a", "test: a", "chore: a",
            "perf: a", "ci: a", "build: a",
        ]);
        let convention = detect_commit_convention(&commits).unwrap();
        assert_eq!(convention.types.len(), 8);
        assert_eq!(convention.types[0], "feat");
    }

    #[test]
    fn test_gitmoji() {
        let commits = strings(&[":sparkles: add login", "🐛 fix crash", "Merge branch 'x'"]);
        let convention = detect_commit_convention(&commits).unwrap();
        assert_eq!(convention.style, CommitStyle::Gitmoji);
        assert_eq!(convention.format, "<emoji> <subject>");
        assert!(convention.types.is_empty());
    }

    #[test]
    fn test_is_gitmoji() {
        assert!(is_gitmoji(":bug: fix"));
        assert!(is_gitmoji("✨ feature"));
        assert!(is_gitmoji("⚡ faster"));
        assert!(!is_gitmoji("fix: bug"));
        assert!(!is_gitmoji(""));
    }

    #[test]
    fn test_freeform() {
        let commits = strings(&["Add login", "Fix crash", "feat: x"]);
        let convention = detect_commit_convention(&commits).unwrap();
        assert_eq!(convention.style, CommitStyle::Freeform);
        assert_eq!(convention.format, "<subject>");
    }

    #[test]
    fn test_branch_prefixes() {
        let branches = strings(&["main", "feat/a", "feat/b", "fix/c", "fix/d", "chore/e", "chore/f"]);
        let convention = detect_branch_convention(&branches).unwrap();
        assert_eq!(convention.prefixes, vec!["feat", "fix", "chore"]);
    }

    #[test]
    fn test_branch_prefixes_by_count() {
        let branches = strings(&["fix/a", "feature/b", "feature/c", "feature/d", "fix/e", "wip/x"]);
        let convention = detect_branch_convention(&branches).unwrap();
        assert_eq!(convention.prefixes, vec!["feature", "fix"]);
    }

    #[test]
    fn test_single_prefix_occurrence() {
        assert!(detect_branch_convention(&strings(&["main", "feat/a", "fix/b"])).is_none());
    }

    #[test]
    fn test_empty_samples() {
        let conventions = detect_git_conventions(&[], &[]);
        assert!(conventions.commit.is_none());
        assert!(conventions.branch.is_none());
        assert!(conventions.is_empty());
    }
}
