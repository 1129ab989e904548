// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command ranking, deduplication and the quick reference.

use std::collections::{BTreeMap, HashSet};

use super::categorize::categorize;
use super::{Category, Command};

/// Package-manager prefixes folded into `npm ` for deduplication.
const PACKAGE_MANAGER_PREFIXES: &[&str] = &["yarn ", "pnpm ", "bun "];

/// A command with its category attached.
#[derive(Debug, Clone)]
struct Ranked<'a> {
    command: &'a Command,
    category: Category,
    key: String,
}

/// Compute the key used to recognise the same command written differently.
///
/// `yarn test`, `pnpm run test` and `npm test (in web)` all normalize to
/// `npm test`.
pub fn normalize_name(name: &str) -> String {
    let mut key = name.trim().to_lowercase();

    if let Some(idx) = key.find(" (in ") {
        key.truncate(idx);
        key = key.trim_end().to_string();
    }

    for prefix in PACKAGE_MANAGER_PREFIXES {
        if let Some(rest) = key.strip_prefix(prefix) {
            key = format!("npm {}", rest);
            break;
        }
    }

    if let Some(rest) = key.strip_prefix("npm run ") {
        key = format!("npm {}", rest);
    }

    key
}

/// Categorize, sort by priority then name, and drop duplicates.
fn rank(commands: &[Command]) -> Vec<Ranked<'_>> {
    let mut ranked: Vec<Ranked<'_>> = commands
        .iter()
        .map(|command| Ranked {
            command,
            category: categorize(command),
            key: normalize_name(&command.name),
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.category
            .priority()
            .cmp(&b.category.priority())
            .then_with(|| a.command.name.cmp(&b.command.name))
    });

    let mut seen = HashSet::new();
    ranked.retain(|r| seen.insert(r.key.clone()));
    ranked
}

/// Sort commands by category priority and name, keeping the first of each
/// normalized name.
pub fn prioritize(commands: &[Command]) -> Vec<Command> {
    rank(commands)
        .into_iter()
        .map(|r| r.command.clone())
        .collect()
}

/// Pick at most `max_n` commands, covering each important category first.
///
/// The first pass takes the highest-ranked command of Build, Test, Lint,
/// Format, Run and Install (in that order); remaining slots are filled from
/// the ranked list.
pub fn quick_reference(commands: &[Command], max_n: usize) -> Vec<Command> {
    let ranked = rank(commands);
    let mut picked: Vec<&Ranked<'_>> = Vec::new();
    let mut picked_keys: HashSet<&str> = HashSet::new();

    for category in Category::IMPORTANT {
        if picked.len() >= max_n {
            break;
        }
        if let Some(r) = ranked.iter().find(|r| r.category == category) {
            picked_keys.insert(&r.key);
            picked.push(r);
        }
    }

    for r in &ranked {
        if picked.len() >= max_n {
            break;
        }
        if picked_keys.insert(&r.key) {
            picked.push(r);
        }
    }

    picked.into_iter().map(|r| r.command.clone()).collect()
}

/// Group the prioritized commands by category, in priority order.
pub fn group_by_category(commands: &[Command]) -> BTreeMap<Category, Vec<Command>> {
    let mut groups: BTreeMap<Category, Vec<Command>> = BTreeMap::new();

    for r in rank(commands) {
        groups.entry(r.category).or_default().push(r.command.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(names: &[&str]) -> Vec<Command> {
        names.iter().map(|n| Command::new(*n, "")).collect()
    }

    fn names(commands: &[Command]) -> Vec<&str> {
        commands.iter().map(|c| c.name.as_str()).collect()
    }

    fn scenario() -> Vec<Command> {
        commands(&[
            "npm run build",
            "yarn test",
            "make lint",
            "go run .",
            "npm install",
            "docker build",
        ])
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("yarn test"), "npm test");
        assert_eq!(normalize_name("npm run build"), "npm build");
        assert_eq!(normalize_name("pnpm run lint"), "npm lint");
        assert_eq!(normalize_name("bun dev"), "npm dev");
        assert_eq!(normalize_name("  NPM Test (in packages/web)"), "npm test");
        assert_eq!(normalize_name("cargo test"), "cargo test");
    }

    #[test]
    fn test_prioritize_scenario() {
        let result = prioritize(&scenario());
        assert_eq!(
            names(&result),
            vec![
                "npm run build",
                "yarn test",
                "make lint",
                "go run .",
                "npm install",
                "docker build"
            ]
        );

        let priorities: Vec<u8> = result.iter().map(|c| categorize(c).priority()).collect();
        assert_eq!(priorities, vec![1, 2, 3, 5, 6, 10]);
    }

    #[test]
    fn test_prioritize_dedups_first_wins() {
        let input = commands(&["yarn test", "npm test", "npm run test (in web)", "pnpm test"]);
        let result = prioritize(&input);
        assert_eq!(result.len(), 1);
        // Sorted by name before dedup, so the alphabetically first spelling wins
        assert_eq!(result[0].name, "npm run test (in web)");
    }

    #[test]
    fn test_prioritize_keys_are_unique() {
        let input = commands(&[
            "npm run build",
            "yarn build",
            "cargo build",
            "cargo build",
            "npm run build (in api)",
            "make",
        ]);
        let result = prioritize(&input);
        let keys: HashSet<String> = result.iter().map(|c| normalize_name(&c.name)).collect();
        assert_eq!(keys.len(), result.len());
    }

    #[test]
    fn test_prioritize_order_is_non_decreasing() {
        let input = commands(&[
            "docker compose up",
            "cargo test",
            "cargo build",
            "npm run dev",
            "alembic upgrade head",
            "cargo fmt",
            "./odd-script",
            "cargo clippy",
            "npm run clean",
        ]);
        let result = prioritize(&input);
        for pair in result.windows(2) {
            let (a, b) = (categorize(&pair[0]), categorize(&pair[1]));
            assert!(a.priority() <= b.priority());
            if a.priority() == b.priority() {
                assert!(pair[0].name <= pair[1].name);
            }
        }
        assert_eq!(result.last().unwrap().name, "./odd-script");
    }

    #[test]
    fn test_prioritize_does_not_mutate_input() {
        let input = scenario();
        let before = input.clone();
        let _ = prioritize(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_quick_reference_cap() {
        let result = quick_reference(&scenario(), 3);
        assert_eq!(result.len(), 3);
        let categories: Vec<Category> = result.iter().map(categorize).collect();
        assert_eq!(
            categories,
            vec![Category::Build, Category::Test, Category::Lint]
        );
    }

    #[test]
    fn test_quick_reference_covers_important_categories() {
        let input = commands(&[
            "cargo build",
            "cargo build --release",
            "make",
            "cargo test",
            "cargo clippy",
            "cargo fmt",
            "cargo run",
            "cargo fetch",
            "docker compose up",
        ]);
        let result = quick_reference(&input, 6);
        let categories: HashSet<Category> = result.iter().map(categorize).collect();
        for category in Category::IMPORTANT {
            assert!(categories.contains(&category), "missing {}", category);
        }
    }

    #[test]
    fn test_quick_reference_fills_remaining_slots() {
        let input = commands(&["cargo build", "make", "cargo test", "docker compose up"]);
        let result = quick_reference(&input, 10);
        assert_eq!(
            names(&result),
            vec!["cargo build", "cargo test", "make", "docker compose up"]
        );
    }

    #[test]
    fn test_quick_reference_zero() {
        assert!(quick_reference(&scenario(), 0).is_empty());
    }

    #[test]
    fn test_quick_reference_skips_duplicate_keys() {
        let input = commands(&["yarn build", "npm run build", "pnpm build"]);
        let result = quick_reference(&input, 5);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_group_by_category() {
        let groups = group_by_category(&scenario());
        let keys: Vec<Category> = groups.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                Category::Build,
                Category::Test,
                Category::Lint,
                Category::Run,
                Category::Install,
                Category::Docker
            ]
        );
        assert_eq!(groups[&Category::Test][0].name, "yarn test");
    }

    #[test]
    fn test_empty_input() {
        assert!(prioritize(&[]).is_empty());
        assert!(quick_reference(&[], 8).is_empty());
        assert!(group_by_category(&[]).is_empty());
    }
}
