use std::path::Path;

use anyhow::Result;
use wasmship::application::{build_command, DeployRunner, ProjectLayout};
use wasmship::domain::ports::RunEventSink;
use wasmship::infrastructure::{ConsoleEventSink, JsonEventSink, SystemProcessRunner};

pub fn cmd_build(project: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = super::load_config(project, config_path)?;
    let layout = ProjectLayout::discover(project, &config.build)?;
    let build = build_command(&config.build, &layout);
    let artifact = layout.artifact(&config.build);

    let (processes, sink): (SystemProcessRunner, Box<dyn RunEventSink>) = if json {
        (
            SystemProcessRunner::for_json(),
            Box::new(JsonEventSink::stdout("build")),
        )
    } else {
        (
            SystemProcessRunner::inherit(),
            Box::new(ConsoleEventSink::stdout()),
        )
    };

    DeployRunner::new(&processes, sink.as_ref()).build_only(&build, &artifact)?;
    Ok(())
}
