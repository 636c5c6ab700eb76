//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{BuildProfile, TargetAccount};
use crate::error::{RunnerError, RunnerResult};

use super::types::Config;

/// Project-level config file, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "wasmship.toml";

/// Overrides the user config location (used for test isolation)
pub const USER_CONFIG_ENV: &str = "WASMSHIP_USER_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RunnerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RunnerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file layers and apply `WASMSHIP_*` overrides.
///
/// An explicit path must exist. Otherwise the project file wins over the
/// user file, and defaults are used when neither exists. A file that exists
/// but does not parse is an error, never silently skipped.
pub fn load_layered(project_root: &Path, explicit: Option<&Path>) -> RunnerResult<LoadedConfig> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project_config = project_root.join(PROJECT_CONFIG_FILE);
            if project_config.is_file() {
                Some(project_config)
            } else {
                user_config_path().filter(|path| path.is_file())
            }
        }
    };

    let mut loaded = match source {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            LoadedConfig::default()
        }
    };

    loaded.config = with_env_overrides(loaded.config)?;
    Ok(loaded)
}

/// User-level config path.
///
/// `WASMSHIP_USER_CONFIG`, else `$XDG_CONFIG_HOME/wasmship/config.toml`,
/// else `~/.config/wasmship/config.toml` on every platform.
pub fn user_config_path() -> Option<PathBuf> {
    user_config_path_with(|key| std::env::var(key).ok(), dirs::home_dir())
}

pub(crate) fn user_config_path_with(
    lookup: impl Fn(&str) -> Option<String>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = lookup(USER_CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let config_home = lookup("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| h.join(".config")))?;
    Some(config_home.join("wasmship").join("config.toml"))
}

/// Apply environment variable overrides (WASMSHIP_* prefix)
pub fn with_env_overrides(config: Config) -> RunnerResult<Config> {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> RunnerResult<Config> {
    // WASMSHIP_ACCOUNT
    if let Some(account) = lookup("WASMSHIP_ACCOUNT").filter(|v| !v.is_empty()) {
        config.deploy.account = Some(TargetAccount::parse(account)?);
    }

    // WASMSHIP_BUILD_PROGRAM
    if let Some(program) = lookup("WASMSHIP_BUILD_PROGRAM").filter(|v| !v.is_empty()) {
        config.build.program = program;
    }

    // WASMSHIP_DEPLOY_PROGRAM
    if let Some(program) = lookup("WASMSHIP_DEPLOY_PROGRAM").filter(|v| !v.is_empty()) {
        config.deploy.program = program;
    }

    // WASMSHIP_PROFILE
    if let Some(profile) = lookup("WASMSHIP_PROFILE").filter(|v| !v.is_empty()) {
        config.build.profile = BuildProfile::from(profile);
    }

    // WASMSHIP_TARGET_TRIPLE
    if let Some(triple) = lookup("WASMSHIP_TARGET_TRIPLE").filter(|v| !v.is_empty()) {
        config.build.target = triple;
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "program",
        "target",
        "profile",
        "rustflags",
        "manifest_path",
        "artifact",
        "extra_args",
        "deploy",
        "subcommand",
        "account",
        "init_function",
        "init_args",
        "targets",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
