//! Deploy planning
//!
//! Turns configuration plus the project on disk into concrete command lines.
//! Everything that can be rejected is rejected here, before any process runs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{BuildConfig, Config, DeployConfig};
use crate::domain::entities::{artifact_path, CommandSpec, DeployPlan, InitCall};
use crate::domain::value_objects::TargetAccount;
use crate::error::{RunnerError, RunnerResult};
use crate::infrastructure::workspace;

/// Project facts needed to name the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Working directory for both steps
    pub root: PathBuf,
    pub crate_name: String,
    /// Cargo target directory, relative to `root` when it lies inside it
    pub target_dir: PathBuf,
}

impl ProjectLayout {
    /// Inspect the project at `root`, honoring `CARGO_TARGET_DIR`
    pub fn discover(root: &Path, build: &BuildConfig) -> RunnerResult<Self> {
        Self::discover_with(root, build, std::env::var("CARGO_TARGET_DIR").ok())
    }

    /// Read the crate name from the manifest unless `[build] artifact` names
    /// it, and locate the target directory cargo will build into.
    pub fn discover_with(
        root: &Path,
        build: &BuildConfig,
        cargo_target_dir: Option<String>,
    ) -> RunnerResult<Self> {
        let manifest = build
            .manifest_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("Cargo.toml"));

        let crate_name = match &build.artifact {
            Some(name) => name.clone(),
            None => workspace::package_name(&root.join(&manifest))?,
        };

        let base = fs::canonicalize(root)?;
        let target = workspace::target_dir(&base.join(&manifest), &base, cargo_target_dir)?;
        let target_dir = match target.strip_prefix(&base) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => target,
        };
        tracing::debug!(target_dir = %target_dir.display(), "resolved cargo target directory");

        Ok(Self {
            root: root.to_path_buf(),
            crate_name,
            target_dir,
        })
    }

    /// Where the build step leaves the wasm binary
    pub fn artifact(&self, build: &BuildConfig) -> PathBuf {
        artifact_path(
            &self.target_dir,
            &build.target,
            &build.profile,
            &self.crate_name,
        )
    }
}

/// Pick the account for this run.
///
/// Precedence: explicit argument, then `--target`, then `[deploy] account`.
pub fn resolve_account(
    config: &Config,
    account: Option<&str>,
    target: Option<&str>,
) -> RunnerResult<TargetAccount> {
    if let Some(account) = account {
        return TargetAccount::parse(account);
    }
    if let Some(name) = target {
        return config.target_account(name).cloned();
    }
    config
        .deploy
        .account
        .clone()
        .ok_or(RunnerError::MissingAccount)
}

/// `RUSTFLAGS='-C link-arg=-s' cargo build --target wasm32-unknown-unknown --release`
pub fn build_command(build: &BuildConfig, layout: &ProjectLayout) -> CommandSpec {
    let mut cmd = CommandSpec::new(&build.program)
        .args(["build", "--target", build.target.as_str()])
        .args(build.profile.cargo_args())
        .current_dir(&layout.root);

    if let Some(manifest) = &build.manifest_path {
        cmd = cmd
            .arg("--manifest-path")
            .arg(manifest.display().to_string());
    }

    cmd = cmd.args(build.extra_args.iter().cloned());

    if !build.rustflags.is_empty() {
        cmd = cmd.env("RUSTFLAGS", &build.rustflags);
    }
    cmd
}

/// `near deploy <account> <artifact> [--initFunction f --initArgs json]`
pub fn deploy_command(
    deploy: &DeployConfig,
    account: &TargetAccount,
    artifact: &Path,
    init: Option<&InitCall>,
    root: &Path,
) -> CommandSpec {
    let mut cmd = CommandSpec::new(&deploy.program)
        .arg(&deploy.subcommand)
        .arg(account.as_str())
        .arg(artifact.display().to_string())
        .current_dir(root);

    if let Some(init) = init {
        cmd = cmd
            .args(["--initFunction", init.function.as_str()])
            .args(["--initArgs", init.args.as_str()]);
    }
    cmd
}

/// Resolve the full build-then-deploy sequence for `account`
pub fn plan_deploy(
    config: &Config,
    layout: &ProjectLayout,
    account: TargetAccount,
) -> RunnerResult<DeployPlan> {
    let init = config.deploy.init_call()?;
    let artifact = layout.artifact(&config.build);
    let build = build_command(&config.build, layout);
    let deploy = deploy_command(
        &config.deploy,
        &account,
        &artifact,
        init.as_ref(),
        &layout.root,
    );

    Ok(DeployPlan {
        account,
        build,
        deploy,
        artifact,
    })
}
