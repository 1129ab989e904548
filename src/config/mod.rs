// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for repoconv.
//!
//! Configuration only shapes the collaborators around the engine (what is
//! walked, how much git history is read, how the report is printed). The
//! detection rules themselves are fixed.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file_from, load_config_for, load_config_from, parse_config};
pub use schema::*;
