// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Convention analysis module.
//!
//! Ties the sampler, the detectors and git inference together into a single
//! [`Report`](crate::report::Report).

mod cancel;
mod engine;
pub mod naming;
mod sampler;

pub use cancel::CancellationToken;
pub use engine::{analyze, Analyzer, DEFAULT_COMMIT_SAMPLE};
pub use sampler::{FileReader, FsReader, Sample, Sampler, MAX_FILE_BYTES};
