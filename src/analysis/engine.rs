// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The analysis engine: runs every detector and assembles the report.

use std::path::{Component, Path};

use crate::commands::{prioritize, Command};
use crate::detectors::{builtin_detectors, DetectionContext, Detector};
use crate::error::{InputError, RepoconvError, Result};
use crate::git::{detect_git_conventions, Git2Porcelain, GitPorcelain};
use crate::inventory::FileInfo;
use crate::report::{GitConventions, Report};

use super::cancel::CancellationToken;
use super::sampler::{FileReader, FsReader};

/// Number of recent commits inspected by default.
pub const DEFAULT_COMMIT_SAMPLE: usize = 100;

/// Convention and command analyzer.
///
/// Built with the filesystem reader and libgit2 by default; every
/// collaborator can be swapped through the builder methods.
pub struct Analyzer {
    detectors: Vec<Box<dyn Detector>>,
    git: Option<Box<dyn GitPorcelain>>,
    reader: Box<dyn FileReader>,
    cancel: CancellationToken,
    commit_sample: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Create an analyzer with the built-in detectors.
    pub fn new() -> Self {
        Self {
            detectors: builtin_detectors(),
            git: Some(Box::new(Git2Porcelain)),
            reader: Box::new(FsReader),
            cancel: CancellationToken::new(),
            commit_sample: DEFAULT_COMMIT_SAMPLE,
        }
    }

    /// Use a different git collaborator.
    pub fn with_git(mut self, git: impl GitPorcelain + 'static) -> Self {
        self.git = Some(Box::new(git));
        self
    }

    /// Skip git history entirely.
    pub fn without_git(mut self) -> Self {
        self.git = None;
        self
    }

    /// Use a different file reader.
    pub fn with_reader(mut self, reader: impl FileReader + 'static) -> Self {
        self.reader = Box::new(reader);
        self
    }

    /// Observe a caller-owned cancellation token.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Number of recent commit messages to inspect.
    pub fn with_commit_sample(mut self, n: usize) -> Self {
        self.commit_sample = n;
        self
    }

    /// Analyze the repository at `root`.
    ///
    /// `files` is the repository inventory and `commands` the developer
    /// commands to rank. Fails only on invalid input or cancellation.
    pub fn analyze(&self, root: &Path, files: &[FileInfo], commands: &[Command]) -> Result<Report> {
        validate(root, files)?;

        let ctx = DetectionContext::new(root, files, self.reader.as_ref(), &self.cancel);
        let mut conventions = Vec::new();

        for detector in &self.detectors {
            self.check_cancelled()?;
            let found = detector.detect(&ctx);
            tracing::debug!("Detector {} found {} convention(s)", detector.name(), found.len());
            conventions.extend(found);
        }
        self.check_cancelled()?;

        let git = match &self.git {
            Some(git) => {
                let commits = git.recent_commits(root, self.commit_sample);
                let branches = git.local_branches(root);
                tracing::debug!(
                    "Git sample: {} commit(s), {} branch(es)",
                    commits.len(),
                    branches.len()
                );
                detect_git_conventions(&commits, &branches)
            }
            None => GitConventions::default(),
        };
        self.check_cancelled()?;

        Ok(Report {
            conventions,
            git,
            commands: prioritize(commands),
        })
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            tracing::debug!("Analysis cancelled");
            return Err(RepoconvError::Cancelled);
        }
        Ok(())
    }
}

/// Analyze with the default collaborators.
pub fn analyze(root: &Path, files: &[FileInfo], commands: &[Command]) -> Result<Report> {
    Analyzer::new().analyze(root, files, commands)
}

fn validate(root: &Path, files: &[FileInfo]) -> Result<()> {
    if !root.is_absolute() {
        return Err(InputError::RelativeRoot {
            path: root.to_path_buf(),
        }
        .into());
    }
    if !root.is_dir() {
        return Err(InputError::RootNotDirectory {
            path: root.to_path_buf(),
        }
        .into());
    }

    for file in files {
        let inconsistent = |reason: &str| -> RepoconvError {
            InputError::InconsistentEntry {
                path: file.path.clone(),
                reason: reason.to_string(),
            }
            .into()
        };

        if file.path.is_absolute() || file.path.has_root() {
            return Err(inconsistent("path must be relative to the root"));
        }
        if file
            .path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(inconsistent("path escapes the root"));
        }
        let last = file.path.file_name().map(|n| n.to_string_lossy());
        if last.as_deref() != Some(file.name.as_str()) {
            return Err(inconsistent("name does not match the path"));
        }
    }

    Ok(())
}
