// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::RepoconvConfig;

/// Get the default configuration.
pub fn default_config() -> RepoconvConfig {
    RepoconvConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# repoconv configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Which files are considered part of the repository
[inventory]
respect_gitignore = true
include_hidden = false
# max_depth = 8
exclude = ["**/fixtures/**", "**/__snapshots__/**"]

# Commit and branch history
[git]
enabled = true
max_commits = 100

# Developer commands
[commands]
discover = true
quick_reference = 8

[[commands.extra]]
name = "make release"
description = "Build and publish a release"

# Report output
[output]
format = "markdown"
"#
}
