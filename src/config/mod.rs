//! Configuration module for wasmship
//!
//! Configuration hierarchy (highest priority first):
//! 1. CLI flags
//! 2. Environment variables (WASMSHIP_*)
//! 3. `--config <path>`, else project config (`wasmship.toml`)
//! 4. User config (`~/.config/wasmship/config.toml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_layered, load_with_warnings, user_config_path, with_env_overrides,
    ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE, USER_CONFIG_ENV,
};
pub use types::{
    BuildConfig, Config, DeployConfig, TargetConfig, DEFAULT_RUSTFLAGS, DEFAULT_TARGET_TRIPLE,
};
