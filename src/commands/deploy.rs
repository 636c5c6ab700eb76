use std::path::{Path, PathBuf};

use anyhow::Result;
use wasmship::application::{plan_deploy, resolve_account, DeployRunner, ProjectLayout};
use wasmship::domain::entities::DeployPlan;
use wasmship::domain::ports::RunEventSink;
use wasmship::infrastructure::{ConsoleEventSink, JsonEventSink, SystemProcessRunner};

/// Arguments of `wasmship deploy`
#[derive(Debug, Clone)]
pub struct DeployArgs {
    pub account: Option<String>,
    pub target: Option<String>,
    pub project: PathBuf,
    pub init_function: Option<String>,
    pub init_args: Option<String>,
    pub dry_run: bool,
}

pub fn cmd_deploy(args: DeployArgs, config_path: Option<&Path>, json: bool) -> Result<()> {
    let mut config = super::load_config(&args.project, config_path)?;

    // CLI flags beat config and environment
    if args.init_function.is_some() {
        config.deploy.init_function = args.init_function;
    }
    if args.init_args.is_some() {
        config.deploy.init_args = args.init_args;
    }

    let account = resolve_account(&config, args.account.as_deref(), args.target.as_deref())?;
    let layout = ProjectLayout::discover(&args.project, &config.build)?;
    let plan = plan_deploy(&config, &layout, account)?;

    if args.dry_run {
        return print_plan(&plan, json);
    }

    let (processes, sink): (SystemProcessRunner, Box<dyn RunEventSink>) = if json {
        (
            SystemProcessRunner::for_json(),
            Box::new(JsonEventSink::stdout("deploy")),
        )
    } else {
        (
            SystemProcessRunner::inherit(),
            Box::new(ConsoleEventSink::stdout()),
        )
    };

    DeployRunner::new(&processes, sink.as_ref()).deploy(&plan)?;
    Ok(())
}

fn print_plan(plan: &DeployPlan, json: bool) -> Result<()> {
    if json {
        super::emit(serde_json::json!({
            "event": "plan",
            "command": "deploy",
            "account": plan.account.as_str(),
            "artifact": plan.artifact.display().to_string(),
            "steps": [
                { "step": "build", "cmdline": plan.build.render() },
                { "step": "deploy", "cmdline": plan.deploy.render() },
            ],
        }))?;
    } else {
        println!("Account:  {}", plan.account);
        println!("Artifact: {}", plan.artifact.display());
        println!("Workdir:  {}", plan.build.cwd.display());
        println!();
        println!("1. {}", plan.build);
        println!("2. {}", plan.deploy);
    }
    Ok(())
}
