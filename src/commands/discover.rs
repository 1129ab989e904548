// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command discovery from build manifests.
//!
//! Each recognised manifest contributes the commands a developer would run
//! in its directory. Manifests below the root carry an ` (in <dir>)` suffix.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

use crate::analysis::{FileReader, MAX_FILE_BYTES};
use crate::inventory::FileInfo;

use super::Command;

const MAKEFILES: &[&str] = &["Makefile", "makefile", "GNUmakefile"];
const COMPOSE_FILES: &[&str] = &[
    "docker-compose.yml",
    "docker-compose.yaml",
    "compose.yml",
    "compose.yaml",
];
/// Lockfiles that select a package manager other than npm.
const LOCKFILES: &[(&str, &str)] = &[
    ("yarn.lock", "yarn"),
    ("pnpm-lock.yaml", "pnpm"),
    ("bun.lockb", "bun"),
    ("bun.lock", "bun"),
];

lazy_static! {
    static ref MAKE_TARGET: Regex =
        Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_.\-/]*)\s*:(?:[^=]|$)").unwrap();
    static ref MAKE_HELP: Regex = Regex::new(r"##\s*(.+?)\s*$").unwrap();
}

/// One manifest being turned into commands.
struct Manifest<'a> {
    file: &'a FileInfo,
    dir: String,
    content: String,
}

impl Manifest<'_> {
    /// ` (in <dir>)` for manifests below the root.
    fn suffix(&self) -> String {
        if self.dir.is_empty() {
            String::new()
        } else {
            format!(" (in {})", self.dir)
        }
    }

    fn command(&self, name: impl AsRef<str>, description: impl Into<String>) -> Command {
        Command::new(format!("{}{}", name.as_ref(), self.suffix()), description)
    }
}

/// Discover developer commands from the manifests in `files`.
pub fn discover(root: &Path, files: &[FileInfo], reader: &dyn FileReader) -> Vec<Command> {
    let paths: HashSet<String> = files
        .iter()
        .filter(|f| !f.is_dir)
        .map(|f| f.unix_path())
        .collect();
    let sibling = |dir: &str, name: &str| {
        if dir.is_empty() {
            paths.contains(name)
        } else {
            paths.contains(&format!("{}/{}", dir, name))
        }
    };

    let mut commands = Vec::new();

    for file in files.iter().filter(|f| !f.is_dir) {
        if !is_manifest(&file.name) {
            continue;
        }

        let content = match reader.read_bytes(&root.join(&file.path), MAX_FILE_BYTES) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::trace!("Skipping manifest {}: {}", file.path.display(), e);
                continue;
            }
        };
        let manifest = Manifest {
            file,
            dir: file.parent_dir(),
            content,
        };

        let found = match file.name.as_str() {
            "package.json" => {
                let pm = LOCKFILES
                    .iter()
                    .find(|(lock, _)| sibling(&manifest.dir, *lock))
                    .map_or("npm", |(_, pm)| *pm);
                from_package_json(&manifest, pm)
            }
            "Cargo.toml" => from_cargo(&manifest, sibling(&manifest.dir, "src/main.rs")),
            "go.mod" => from_go_mod(&manifest, sibling(&manifest.dir, "main.go")),
            "pyproject.toml" => from_pyproject(&manifest),
            "requirements.txt" => vec![manifest.command(
                "pip install -r requirements.txt",
                "Install Python dependencies",
            )],
            "Gemfile" => vec![manifest.command("bundle install", "Install Ruby dependencies")],
            "Dockerfile" => vec![from_dockerfile(root, &manifest)],
            name if MAKEFILES.contains(&name) => from_makefile(&manifest),
            _ => vec![manifest.command("docker compose up", "Start services with Docker Compose")],
        };

        tracing::debug!(
            "Discovered {} command(s) from {}",
            found.len(),
            manifest.file.path.display()
        );
        commands.extend(found);
    }

    commands
}

fn is_manifest(name: &str) -> bool {
    matches!(
        name,
        "package.json" | "Cargo.toml" | "go.mod" | "pyproject.toml" | "requirements.txt" | "Gemfile" | "Dockerfile"
    ) || MAKEFILES.contains(&name)
        || COMPOSE_FILES.contains(&name)
}

fn from_package_json(manifest: &Manifest<'_>, pm: &str) -> Vec<Command> {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(&manifest.content) else {
        tracing::debug!("Invalid package.json at {}", manifest.file.path.display());
        return Vec::new();
    };

    let mut commands = vec![manifest.command(format!("{} install", pm), "Install dependencies")];
    if let Some(scripts) = json.get("scripts").and_then(|s| s.as_object()) {
        for (name, body) in scripts {
            let body = body.as_str().unwrap_or_default();
            commands.push(manifest.command(format!("{} run {}", pm, name), body));
        }
    }
    commands
}

fn from_cargo(manifest: &Manifest<'_>, has_main: bool) -> Vec<Command> {
    let Ok(toml) = toml::from_str::<toml::Value>(&manifest.content) else {
        tracing::debug!("Invalid Cargo.toml at {}", manifest.file.path.display());
        return Vec::new();
    };

    let mut commands = vec![
        manifest.command("cargo build", "Build the crate"),
        manifest.command("cargo test", "Run the test suite"),
        manifest.command("cargo clippy", "Lint with Clippy"),
        manifest.command("cargo fmt", "Format with rustfmt"),
    ];
    if has_main || toml.get("bin").is_some() {
        commands.push(manifest.command("cargo run", "Run the binary"));
    }
    commands
}

fn from_go_mod(manifest: &Manifest<'_>, has_main: bool) -> Vec<Command> {
    if !manifest
        .content
        .lines()
        .any(|line| line.trim_start().starts_with("module "))
    {
        return Vec::new();
    }

    let mut commands = vec![
        manifest.command("go build ./...", "Build all packages"),
        manifest.command("go test ./...", "Run all tests"),
        manifest.command("go vet ./...", "Report suspicious constructs"),
        manifest.command("go mod download", "Download module dependencies"),
    ];
    if has_main {
        commands.push(manifest.command("go run .", "Run the main package"));
    }
    commands
}

fn from_pyproject(manifest: &Manifest<'_>) -> Vec<Command> {
    let Ok(toml) = toml::from_str::<toml::Value>(&manifest.content) else {
        tracing::debug!("Invalid pyproject.toml at {}", manifest.file.path.display());
        return Vec::new();
    };
    let tool = toml.get("tool");
    let has_tool = |name: &str| tool.and_then(|t| t.get(name)).is_some();

    let mut commands = Vec::new();
    if has_tool("poetry") {
        commands.push(manifest.command("poetry install", "Install dependencies with Poetry"));
        commands.push(manifest.command("poetry run pytest", "Run tests with pytest"));
    } else {
        commands.push(manifest.command("pip install -e .", "Install the package in editable mode"));
    }
    if has_tool("pytest") {
        commands.push(manifest.command("pytest", "Run tests with pytest"));
    }
    if has_tool("ruff") {
        commands.push(manifest.command("ruff check .", "Lint with Ruff"));
        commands.push(manifest.command("ruff format .", "Format with Ruff"));
    }
    if has_tool("black") {
        commands.push(manifest.command("black .", "Format with Black"));
    }
    commands
}

fn from_makefile(manifest: &Manifest<'_>) -> Vec<Command> {
    let mut seen = HashSet::new();
    let mut commands = Vec::new();

    for line in manifest.content.lines() {
        let Some(caps) = MAKE_TARGET.captures(line) else {
            continue;
        };
        let target = &caps[1];
        if !seen.insert(target.to_string()) {
            continue;
        }
        let description = MAKE_HELP
            .captures(line)
            .map(|c| c[1].to_string())
            .unwrap_or_default();
        commands.push(manifest.command(format!("make {}", target), description));
    }

    commands
}

fn from_dockerfile(root: &Path, manifest: &Manifest<'_>) -> Command {
    let image = if manifest.dir.is_empty() {
        root.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "app".to_string())
    } else {
        manifest
            .dir
            .rsplit('/')
            .next()
            .unwrap_or(manifest.dir.as_str())
            .to_lowercase()
    };
    manifest.command(format!("docker build -t {} .", image), "Build the Docker image")
}
