//! Artifact inspection

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::domain::entities::ArtifactInfo;
use crate::error::RunnerResult;

/// Size and SHA-256 of the build output, or `None` if it does not exist
pub fn inspect_artifact(path: &Path) -> RunnerResult<Option<ArtifactInfo>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Some(ArtifactInfo {
        size: bytes.len() as u64,
        sha256: format!("{:x}", Sha256::digest(&bytes)),
    }))
}
