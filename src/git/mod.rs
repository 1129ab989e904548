// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads recent history through [`GitPorcelain`] and infers commit and
//! branch conventions from it.

mod conventions;
mod repo;

pub use conventions::{
    detect_branch_convention, detect_commit_convention, detect_git_conventions, is_gitmoji,
};
pub use repo::{Git2Porcelain, GitPorcelain, Repository};
