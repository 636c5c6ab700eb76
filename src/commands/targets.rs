use std::path::Path;

use anyhow::Result;

pub fn cmd_targets(project: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = super::load_config(project, config_path)?;
    let default = config.deploy.account.as_ref();

    if json {
        let targets: Vec<_> = config
            .targets
            .iter()
            .map(|(name, target)| {
                serde_json::json!({
                    "name": name,
                    "account": target.account.as_str(),
                })
            })
            .collect();
        super::emit(serde_json::json!({
            "event": "targets",
            "command": "targets",
            "default_account": default.map(|a| a.as_str()),
            "targets": targets,
        }))?;
        return Ok(());
    }

    if config.targets.is_empty() {
        println!("No targets configured. Add one to wasmship.toml:");
        println!();
        println!("  [targets.testnet]");
        println!("  account = \"contractspace.testnet\"");
    } else {
        let width = config.targets.keys().map(String::len).max().unwrap_or(0);
        for (name, target) in &config.targets {
            println!("{:width$}  {}", name, target.account, width = width);
        }
    }

    if let Some(account) = default {
        println!();
        println!("Default account: {}", account);
    }
    Ok(())
}
