// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Report model and rendering.

mod render;
mod types;

pub use render::{render, render_json, render_markdown, OutputFormat};
pub use types::{
    BranchConvention, CommitConvention, CommitStyle, Convention, ConventionCategory,
    GitConventions, Report,
};
