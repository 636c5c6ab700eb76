//! wasmship CLI - build a contract to wasm32 and deploy it
//!
//! Usage: wasmship <COMMAND>
//!
//! Commands:
//!   deploy   Build the contract, then deploy it to an account
//!   build    Build the contract without deploying
//!   targets  List named deploy targets
//!
//! The process exits with the first non-zero exit code of the external
//! tools, 2 for usage and configuration errors, and 0 on success.

mod cli;
mod commands;

use clap::Parser;
use wasmship::RunnerError;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    wasmship::logging::init(cli.verbose);
    let json = cli.json;

    if let Err(err) = commands::dispatch(cli) {
        report_error(&err, json);
        std::process::exit(exit_code(&err));
    }
}

/// Exit code for a failed command
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<RunnerError>()
        .map(RunnerError::exit_code)
        .unwrap_or(1)
}

fn report_error(err: &anyhow::Error, json: bool) {
    if json {
        let code = err
            .downcast_ref::<RunnerError>()
            .map(RunnerError::code)
            .unwrap_or("error");
        println!(
            "{}",
            serde_json::json!({
                "event": "error",
                "code": code,
                "message": format!("{:#}", err),
                "exit_code": exit_code(err),
            })
        );
    } else {
        eprintln!("error: {:#}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parse_deploy_with_account() {
        let cli = Cli::try_parse_from(["wasmship", "deploy", "contractspace.testnet"]).unwrap();
        if let Commands::Deploy {
            account,
            target,
            project,
            dry_run,
            ..
        } = cli.command
        {
            assert_eq!(account.as_deref(), Some("contractspace.testnet"));
            assert!(target.is_none());
            assert_eq!(project, PathBuf::from("."));
            assert!(!dry_run);
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_deploy_with_target_and_init() {
        let cli = Cli::try_parse_from([
            "wasmship",
            "deploy",
            "--target",
            "beer",
            "--init-function",
            "new",
            "--init-args",
            r#"{"owner_id":"beer333.testnet"}"#,
            "--dry-run",
        ])
        .unwrap();
        if let Commands::Deploy {
            target,
            init_function,
            init_args,
            dry_run,
            ..
        } = cli.command
        {
            assert_eq!(target.as_deref(), Some("beer"));
            assert_eq!(init_function.as_deref(), Some("new"));
            assert_eq!(init_args.as_deref(), Some(r#"{"owner_id":"beer333.testnet"}"#));
            assert!(dry_run);
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli =
            Cli::try_parse_from(["wasmship", "build", "--json", "-vv", "--config", "ci.toml"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
        assert!(matches!(cli.command, Commands::Build { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["wasmship"]).is_err());
    }

    #[test]
    fn test_exit_code_from_runner_error() {
        let err = anyhow::Error::new(RunnerError::BuildFailed { code: 101 });
        assert_eq!(exit_code(&err), 101);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), 1);
    }
}
