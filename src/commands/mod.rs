//! Subcommand implementations

mod build;
mod deploy;
mod targets;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use wasmship::config::{self, Config};

use crate::cli::{Cli, Commands};

pub use build::cmd_build;
pub use deploy::{cmd_deploy, DeployArgs};
pub use targets::cmd_targets;

/// Run the parsed command line
pub fn dispatch(cli: Cli) -> Result<()> {
    let json = cli.json;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Deploy {
            account,
            target,
            project,
            init_function,
            init_args,
            dry_run,
        } => cmd_deploy(
            DeployArgs {
                account,
                target,
                project,
                init_function,
                init_args,
                dry_run,
            },
            config_path,
            json,
        ),
        Commands::Build { project } => cmd_build(&project, config_path, json),
        Commands::Targets { project } => cmd_targets(&project, config_path, json),
    }
}

/// Load layered config for `project`, logging non-fatal warnings
fn load_config(project: &Path, explicit: Option<&Path>) -> Result<Config> {
    let loaded = config::load_layered(project, explicit)?;
    match &loaded.source {
        Some(path) => tracing::info!(path = %path.display(), "using config file"),
        None => tracing::info!("no config file, using defaults"),
    }

    for warning in &loaded.warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                "unknown config key '{}' at {} (did you mean '{}'?)",
                warning.key,
                location,
                suggestion
            ),
            None => tracing::warn!("unknown config key '{}' at {}", warning.key, location),
        }
    }

    Ok(loaded.config)
}

/// Write a single NDJSON event (one JSON object per line) to stdout.
fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", event)?;
    out.flush()
}
