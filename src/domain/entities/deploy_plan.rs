//! Deploy Plan
//!
//! Everything a run needs, resolved up front: the account, both command
//! lines and the artifact path that links them.

use std::path::PathBuf;

use crate::domain::value_objects::TargetAccount;

use super::CommandSpec;

/// Constructor call bundled with the deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitCall {
    pub function: String,
    /// JSON object passed as the function's arguments
    pub args: String,
}

/// Resolved build-then-deploy sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub account: TargetAccount,
    pub build: CommandSpec,
    pub deploy: CommandSpec,
    /// Artifact path as handed to the deploy tool (relative to `build.cwd` unless absolute)
    pub artifact: PathBuf,
}

impl DeployPlan {
    /// Artifact location as seen from this process
    pub fn artifact_on_disk(&self) -> PathBuf {
        self.build.cwd.join(&self.artifact)
    }
}
