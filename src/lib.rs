//! wasmship - build a contract to WebAssembly and deploy it to a chain account
//!
//! A run is two external commands in strict order: the toolchain build
//! (`cargo build --target wasm32-unknown-unknown --release` with stripped
//! symbols), then the deploy tool (`near deploy <account> <artifact>`).
//! The first non-zero exit code stops the run and becomes its exit code.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{plan_deploy, resolve_account, DeployRunner, ProjectLayout, RunReport};
pub use config::Config;
pub use domain::entities::{CommandSpec, DeployPlan};
pub use domain::value_objects::{BuildProfile, RunState, Step, TargetAccount};
pub use error::{RunnerError, RunnerResult};
