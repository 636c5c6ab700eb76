use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// wasmship - build a contract to wasm32 and deploy it to a chain account
#[derive(Parser, Debug)]
#[command(name = "wasmship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout (tool output goes to stderr)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./wasmship.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the contract, then deploy it to an account
    Deploy {
        /// Account to deploy to (e.g. contractspace.testnet)
        account: Option<String>,

        /// Named target from [targets] (used when ACCOUNT is not given)
        #[arg(short, long)]
        target: Option<String>,

        /// Contract project directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Call this function right after deploying (e.g. new)
        #[arg(long)]
        init_function: Option<String>,

        /// JSON arguments for --init-function
        #[arg(long)]
        init_args: Option<String>,

        /// Print the commands without running them
        #[arg(long)]
        dry_run: bool,
    },

    /// Build the contract without deploying
    Build {
        /// Contract project directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },

    /// List named deploy targets
    Targets {
        /// Contract project directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },
}
