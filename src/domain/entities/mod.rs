//! Domain Entities

mod artifact;
mod command_spec;
mod deploy_plan;

pub use artifact::{artifact_file_name, artifact_path, ArtifactInfo};
pub use command_spec::CommandSpec;
pub use deploy_plan::{DeployPlan, InitCall};
