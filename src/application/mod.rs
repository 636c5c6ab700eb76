//! Application Layer
//!
//! Use cases that orchestrate the build-then-deploy flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployRunner` - Runs the compile step, then the deploy step, failing fast
//! - `planner` - Resolves the account, artifact path and both command lines

pub mod planner;
pub mod run;

pub use planner::{build_command, deploy_command, plan_deploy, resolve_account, ProjectLayout};
pub use run::{DeployRunner, RunReport};
