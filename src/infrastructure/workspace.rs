//! Contract workspace lookups
//!
//! Reads just enough of the crate manifest (and the manifests above it) to
//! name the artifact and find the directory cargo builds into.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RunnerError, RunnerResult};

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<Package>,
    workspace: Option<Workspace>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    /// Explicit workspace root (`package.workspace`)
    workspace: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct Workspace {
    #[serde(default)]
    exclude: Vec<PathBuf>,
}

fn parse_manifest(path: &Path, content: &str) -> RunnerResult<Manifest> {
    toml::from_str(content).map_err(|e| RunnerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// `None` when there is no manifest at `path`
fn read_manifest(path: &Path) -> RunnerResult<Option<Manifest>> {
    match fs::read_to_string(path) {
        Ok(content) => parse_manifest(path, &content).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn canonical_or_self(path: PathBuf) -> PathBuf {
    fs::canonicalize(&path).unwrap_or(path)
}

/// `[package].name` of the manifest at `manifest_path`
pub fn package_name(manifest_path: &Path) -> RunnerResult<String> {
    let content = fs::read_to_string(manifest_path)?;
    let manifest = parse_manifest(manifest_path, &content)?;

    manifest
        .package
        .map(|package| package.name)
        .ok_or_else(|| RunnerError::ManifestMissingPackage {
            path: manifest_path.to_path_buf(),
        })
}

/// Root of the cargo workspace the crate at `manifest_path` builds in.
///
/// The crate's own directory if its manifest has `[workspace]`, the
/// `package.workspace` directory if set, else the nearest ancestor manifest
/// with a `[workspace]` table that does not exclude the crate. A crate
/// outside any workspace is its own root.
pub fn workspace_root(manifest_path: &Path) -> RunnerResult<PathBuf> {
    let crate_dir = canonical_or_self(
        manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    );

    if let Some(manifest) = read_manifest(manifest_path)? {
        if manifest.workspace.is_some() {
            return Ok(crate_dir);
        }
        if let Some(root) = manifest.package.and_then(|package| package.workspace) {
            return Ok(canonical_or_self(crate_dir.join(root)));
        }
    }

    for dir in crate_dir.ancestors().skip(1) {
        let candidate = dir.join("Cargo.toml");
        // Unreadable manifests above the project are not ours to report
        let Ok(content) = fs::read_to_string(&candidate) else {
            continue;
        };
        let Ok(manifest) = parse_manifest(&candidate, &content) else {
            continue;
        };
        if let Some(workspace) = manifest.workspace {
            let excluded = workspace
                .exclude
                .iter()
                .any(|path| crate_dir.starts_with(dir.join(path)));
            tracing::debug!(root = %dir.display(), excluded, "found enclosing workspace");
            return Ok(if excluded { crate_dir } else { dir.to_path_buf() });
        }
    }

    Ok(crate_dir)
}

/// Absolute directory cargo writes build output to.
///
/// `CARGO_TARGET_DIR` (relative to `cwd`) when set, else `target` under the
/// workspace root of `manifest_path`.
pub fn target_dir(
    manifest_path: &Path,
    cwd: &Path,
    cargo_target_dir: Option<String>,
) -> RunnerResult<PathBuf> {
    match cargo_target_dir.filter(|dir| !dir.is_empty()) {
        Some(dir) => Ok(cwd.join(dir)),
        None => Ok(workspace_root(manifest_path)?.join("target")),
    }
}
