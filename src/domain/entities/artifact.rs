//! Compiled contract artifact

use std::path::{Path, PathBuf};

use crate::domain::value_objects::BuildProfile;

/// `ref-exchange` -> `ref_exchange.wasm` (cargo replaces dashes in lib names)
pub fn artifact_file_name(crate_name: &str) -> String {
    format!("{}.wasm", crate_name.replace('-', "_"))
}

/// Deterministic output path: `<target-dir>/<triple>/<profile-dir>/<crate>.wasm`
pub fn artifact_path(
    target_dir: &Path,
    target_triple: &str,
    profile: &BuildProfile,
    crate_name: &str,
) -> PathBuf {
    target_dir
        .join(target_triple)
        .join(profile.output_dir())
        .join(artifact_file_name(crate_name))
}

/// What the build step actually produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub size: u64,
    /// Lowercase hex SHA-256 of the file contents
    pub sha256: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_artifact_path() {
        let path = artifact_path(
            Path::new("target"),
            "wasm32-unknown-unknown",
            &BuildProfile::Release,
            "ref-exchange",
        );
        assert_eq!(
            path,
            PathBuf::from("target/wasm32-unknown-unknown/release/ref_exchange.wasm")
        );
    }

    #[test]
    fn dev_artifact_lands_in_debug() {
        let path = artifact_path(
            Path::new("/tmp/shared-target"),
            "wasm32-unknown-unknown",
            &BuildProfile::Dev,
            "pool",
        );
        assert_eq!(
            path,
            PathBuf::from("/tmp/shared-target/wasm32-unknown-unknown/debug/pool.wasm")
        );
    }
}
