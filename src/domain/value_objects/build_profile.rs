//! Build Profile Value Object
//!
//! Maps a cargo profile name to its command-line flags and output directory.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cargo build profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildProfile {
    /// `--release`, output under `release/`
    #[default]
    Release,
    /// cargo's default profile, output under `debug/`
    Dev,
    /// `--profile <name>`, output under `<name>/`
    Custom(String),
}

impl BuildProfile {
    /// Flags passed to `cargo build` for this profile
    pub fn cargo_args(&self) -> Vec<String> {
        match self {
            Self::Release => vec!["--release".to_string()],
            Self::Dev => Vec::new(),
            Self::Custom(name) => vec!["--profile".to_string(), name.clone()],
        }
    }

    /// Directory name under `<target-dir>/<triple>/`
    pub fn output_dir(&self) -> &str {
        match self {
            Self::Release => "release",
            Self::Dev => "debug",
            Self::Custom(name) => name,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Release => "release",
            Self::Dev => "dev",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for BuildProfile {
    fn from(name: String) -> Self {
        match name.as_str() {
            "release" => Self::Release,
            "dev" | "debug" => Self::Dev,
            _ => Self::Custom(name),
        }
    }
}

impl From<&str> for BuildProfile {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<BuildProfile> for String {
    fn from(profile: BuildProfile) -> Self {
        profile.name().to_string()
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
