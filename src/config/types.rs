//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::InitCall;
use crate::domain::value_objects::{BuildProfile, TargetAccount};
use crate::error::{RunnerError, RunnerResult};

/// WebAssembly without host OS bindings
pub const DEFAULT_TARGET_TRIPLE: &str = "wasm32-unknown-unknown";

/// Strip symbols at link time to keep the contract small
pub const DEFAULT_RUSTFLAGS: &str = "-C link-arg=-s";

/// Compile step configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_build_program")]
    pub program: String,

    #[serde(default = "default_target_triple")]
    pub target: String,

    #[serde(default)]
    pub profile: BuildProfile,

    #[serde(default = "default_rustflags")]
    pub rustflags: String,

    /// Passed as `--manifest-path` when set (relative to the project root)
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,

    /// Crate name used for the artifact file; read from the manifest when unset
    #[serde(default)]
    pub artifact: Option<String>,

    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: default_build_program(),
            target: default_target_triple(),
            profile: BuildProfile::default(),
            rustflags: default_rustflags(),
            manifest_path: None,
            artifact: None,
            extra_args: Vec::new(),
        }
    }
}

fn default_build_program() -> String {
    "cargo".to_string()
}

fn default_target_triple() -> String {
    DEFAULT_TARGET_TRIPLE.to_string()
}

fn default_rustflags() -> String {
    DEFAULT_RUSTFLAGS.to_string()
}

/// Deploy step configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_deploy_program")]
    pub program: String,

    #[serde(default = "default_deploy_subcommand")]
    pub subcommand: String,

    /// Account used when neither ACCOUNT nor --target is given
    #[serde(default)]
    pub account: Option<TargetAccount>,

    #[serde(default)]
    pub init_function: Option<String>,

    /// JSON arguments for `init_function`
    #[serde(default)]
    pub init_args: Option<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            program: default_deploy_program(),
            subcommand: default_deploy_subcommand(),
            account: None,
            init_function: None,
            init_args: None,
        }
    }
}

fn default_deploy_program() -> String {
    "near".to_string()
}

fn default_deploy_subcommand() -> String {
    "deploy".to_string()
}

impl DeployConfig {
    /// Validated constructor call, if one is configured.
    ///
    /// Args without a function are rejected; a function without args gets `{}`.
    pub fn init_call(&self) -> RunnerResult<Option<InitCall>> {
        match (&self.init_function, &self.init_args) {
            (None, None) => Ok(None),
            (None, Some(_)) => Err(RunnerError::InvalidInitArgs {
                message: "init args given without an init function".to_string(),
            }),
            (Some(function), args) => {
                let args = args.clone().unwrap_or_else(|| "{}".to_string());
                serde_json::from_str::<serde_json::Value>(&args).map_err(|e| {
                    RunnerError::InvalidInitArgs {
                        message: e.to_string(),
                    }
                })?;
                Ok(Some(InitCall {
                    function: function.clone(),
                    args,
                }))
            }
        }
    }
}

/// A named deployment target (`[targets.<name>]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub account: TargetAccount,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfig>,
}

impl Config {
    /// Names of configured targets, sorted
    pub fn target_names(&self) -> Vec<String> {
        self.targets.keys().cloned().collect()
    }

    /// Look up the account of a named target
    pub fn target_account(&self, name: &str) -> RunnerResult<&TargetAccount> {
        self.targets
            .get(name)
            .map(|target| &target.account)
            .ok_or_else(|| RunnerError::UnknownTarget {
                name: name.to_string(),
                known: self.target_names(),
            })
    }
}
