// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! File inventory for a repository.
//!
//! The engine never walks the filesystem itself; it consumes the
//! `FileInfo` records produced here (or by any other caller).

mod file_info;
mod scanner;

pub use file_info::FileInfo;
pub use scanner::{scan, ALWAYS_SKIPPED_DIRS};
