// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository access through git2.

use crate::error::{GitError, RepoconvError, Result};
use git2::{BranchType, Repository as Git2Repo, Sort};
use std::path::Path;

/// Read-only view of a repository's history.
pub trait GitPorcelain: Send + Sync {
    /// Up to `n` most recent commit messages reachable from HEAD, newest
    /// first. Empty when `root` is not inside a repository.
    fn recent_commits(&self, root: &Path, n: usize) -> Vec<String>;

    /// Names of all local branches. Empty when `root` is not inside a
    /// repository.
    fn local_branches(&self, root: &Path) -> Vec<String>;
}

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Discover the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                RepoconvError::Git(GitError::NotARepository)
            } else {
                RepoconvError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Messages of the `n` most recent commits from HEAD, trimmed.
    pub fn recent_messages(&self, n: usize) -> Result<Vec<String>> {
        let mut revwalk = self.inner.revwalk().map_err(|e| command_failed("revwalk", e))?;
        revwalk
            .set_sorting(Sort::TIME)
            .map_err(|e| command_failed("revwalk.set_sorting", e))?;
        revwalk.push_head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch || e.code() == git2::ErrorCode::NotFound {
                RepoconvError::Git(GitError::UnbornHead)
            } else {
                command_failed("revwalk.push_head", e)
            }
        })?;

        let mut messages = Vec::new();
        for oid in revwalk.take(n) {
            let oid = oid.map_err(|e| command_failed("revwalk", e))?;
            let commit = self
                .inner
                .find_commit(oid)
                .map_err(|e| command_failed("find_commit", e))?;
            let message = String::from_utf8_lossy(commit.message_bytes());
            messages.push(message.trim().to_string());
        }

        Ok(messages)
    }

    /// Local branch names.
    pub fn branch_names(&self) -> Result<Vec<String>> {
        let branches = self
            .inner
            .branches(Some(BranchType::Local))
            .map_err(|e| command_failed("branches", e))?;

        let mut names = Vec::new();
        for branch in branches {
            let (branch, _) = branch.map_err(|e| command_failed("branches", e))?;
            if let Ok(Some(name)) = branch.name() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }
}

fn command_failed(command: &str, e: git2::Error) -> RepoconvError {
    RepoconvError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: e.message().to_string(),
    })
}

/// [`GitPorcelain`] backed by libgit2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Porcelain;

impl Git2Porcelain {
    fn with_repo<T>(
        root: &Path,
        what: &str,
        f: impl FnOnce(&Repository) -> Result<Vec<T>>,
    ) -> Vec<T> {
        let result = Repository::open(root).and_then(|repo| f(&repo));
        match result {
            Ok(items) => items,
            Err(RepoconvError::Git(GitError::NotARepository)) => {
                tracing::debug!("{} is not inside a git repository", root.display());
                Vec::new()
            }
            Err(RepoconvError::Git(GitError::UnbornHead)) => {
                tracing::debug!("Repository at {} has no commits", root.display());
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", what, e);
                Vec::new()
            }
        }
    }
}

impl GitPorcelain for Git2Porcelain {
    fn recent_commits(&self, root: &Path, n: usize) -> Vec<String> {
        Self::with_repo(root, "commit history", |repo| repo.recent_messages(n))
    }

    fn local_branches(&self, root: &Path) -> Vec<String> {
        Self::with_repo(root, "branches", |repo| repo.branch_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn commit(repo: &Git2Repo, message: &str) {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<git2::Commit<'_>> = repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap();
    }

    fn create_test_repo(messages: &[&str]) -> (TempDir, Git2Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        for message in messages {
            commit(&repo, message);
        }
        (dir, repo)
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(RepoconvError::Git(GitError::NotARepository))
        ));
        assert!(Git2Porcelain.recent_commits(dir.path(), 10).is_empty());
        assert!(Git2Porcelain.local_branches(dir.path()).is_empty());
    }

    #[test]
    fn test_recent_commits_newest_first() {
        let (dir, _repo) = create_test_repo(&["feat: one\n", "fix: two\n\nbody", "docs: three"]);
        let messages = Git2Porcelain.recent_commits(dir.path(), 10);
        assert_eq!(messages.len(), 3);
        assert!(messages.contains(&"fix: two\n\nbody".to_string()));
        assert!(messages.contains(&"feat: one".to_string()));
    }

    #[test]
    fn test_recent_commits_cap() {
        let (dir, _repo) = create_test_repo(&["a", "b", "c", "d"]);
        assert_eq!(Git2Porcelain.recent_commits(dir.path(), 2).len(), 2);
        assert!(Git2Porcelain.recent_commits(dir.path(), 0).is_empty());
    }

    #[test]
    fn test_unborn_head() {
        let (dir, _repo) = create_test_repo(&[]);
        assert!(Git2Porcelain.recent_commits(dir.path(), 10).is_empty());
        assert!(Git2Porcelain.local_branches(dir.path()).is_empty());
    }

    #[test]
    fn test_local_branches() {
        let (dir, repo) = create_test_repo(&["initial"]);
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.branch("feat/login", &head, false).unwrap();
        repo.branch("fix/typo", &head, false).unwrap();

        let branches = Git2Porcelain.local_branches(dir.path());
        assert_eq!(branches.len(), 3);
        assert!(branches.contains(&"feat/login".to_string()));
        assert!(branches.contains(&"fix/typo".to_string()));
    }

    #[test]
    fn test_discovers_from_subdirectory() {
        let (dir, _repo) = create_test_repo(&["initial"]);
        let sub = dir.path().join("src");
        std::fs::create_dir(&sub).unwrap();
        assert_eq!(Git2Porcelain.recent_commits(&sub, 5), vec!["initial"]);
    }
}
