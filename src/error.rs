//! Error types for wasmship
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! and recovers the process exit code with [`RunnerError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for usage and configuration errors (matches clap).
pub const USAGE_EXIT_CODE: i32 = 2;

/// Result type alias for wasmship operations
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Main error type for wasmship operations
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The compile step exited non-zero
    #[error("build failed with exit code {code}")]
    BuildFailed { code: i32 },

    /// The deploy step exited non-zero (network, auth and account errors alike)
    #[error("deploy to '{account}' failed with exit code {code}")]
    DeployFailed { account: String, code: i32 },

    /// Account id rejected before anything was run
    #[error("invalid account id '{value}': {reason}")]
    InvalidAccount { value: String, reason: String },

    /// Neither an argument, a target nor a configured default named an account
    #[error("no target account given - pass ACCOUNT, --target <name>, or set [deploy] account")]
    MissingAccount,

    /// `--target` named something that is not in `[targets]`
    #[error("unknown target '{name}' (known: {})", format_known(.known))]
    UnknownTarget { name: String, known: Vec<String> },

    /// Configuration file could not be parsed or is inconsistent
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// `init_args` is not valid JSON
    #[error("init args are not valid JSON: {message}")]
    InvalidInitArgs { message: String },

    /// Crate manifest has no `[package].name`
    #[error("cannot determine package name from {path}")]
    ManifestMissingPackage { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunnerError {
    /// Process exit code for this error.
    ///
    /// Step failures surface the external tool's own status; everything
    /// else is a usage error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::BuildFailed { code } | Self::DeployFailed { code, .. } => *code,
            _ => USAGE_EXIT_CODE,
        }
    }

    /// Stable machine-readable code for JSON output
    pub fn code(&self) -> &'static str {
        match self {
            Self::BuildFailed { .. } => "build_failed",
            Self::DeployFailed { .. } => "deploy_failed",
            Self::InvalidAccount { .. } => "invalid_account",
            Self::MissingAccount => "missing_account",
            Self::UnknownTarget { .. } => "unknown_target",
            Self::InvalidConfig { .. } => "invalid_config",
            Self::InvalidInitArgs { .. } => "invalid_init_args",
            Self::ManifestMissingPackage { .. } => "manifest_missing_package",
            Self::Io(_) => "io",
        }
    }
}

fn format_known(known: &[String]) -> String {
    if known.is_empty() {
        "none configured".to_string()
    } else {
        known.join(", ")
    }
}
